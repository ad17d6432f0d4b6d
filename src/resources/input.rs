//! Host-fed keyboard input resource.
//!
//! The core owns no event loop; the host translates whatever windowing
//! events it receives into `set_pressed` calls before each frame. Scripts
//! poll the state through [`crate::components::script::ScriptContext`];
//! physics, render, and particle code never touch it.

use rustc_hash::FxHashSet;

/// Logical keys the engine exposes to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
}

/// Current keyboard state. Pressed keys are present in the set.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: FxHashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
