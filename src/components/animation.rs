//! Sprite-sheet animation components.
//!
//! An [`Animation`] tracks playback through equally-spaced horizontal
//! frames of a sprite sheet. [`AnimationState`] maps named states ("idle",
//! "run", "jump") to an animation plus the sprite it plays on; game scripts
//! switch `current` and the animation system does the rest.

use rustc_hash::FxHashMap;

use crate::components::sprite::Sprite;
use crate::ecs::store::Component;
use crate::math::{Vec2, vec2};

/// Playback state for one animation strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub frame_count: u32,
    pub current_frame: u32,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    /// Top-left texel of frame zero in the sprite sheet.
    pub base_tex_coord: Vec2,
    pub elapsed_time: f32,
    pub is_playing: bool,
    pub looped: bool,
}

impl Animation {
    pub fn new(frame_count: u32, frame_duration: f32, base_tex_coord: Vec2) -> Self {
        Self {
            frame_count,
            current_frame: 0,
            frame_duration,
            base_tex_coord,
            elapsed_time: 0.0,
            is_playing: true,
            looped: true,
        }
    }

    pub fn once(mut self) -> Self {
        self.looped = false;
        self
    }

    /// Source texel of the current frame. Frames advance rightward by the
    /// sprite's source width.
    pub fn frame_tex_coord(&self, frame_width: f32) -> Vec2 {
        vec2(
            self.base_tex_coord.x + self.current_frame as f32 * frame_width,
            self.base_tex_coord.y,
        )
    }

    /// Rewind to frame zero and start playing.
    pub fn restart(&mut self) {
        self.current_frame = 0;
        self.elapsed_time = 0.0;
        self.is_playing = true;
    }
}

/// One named state: the animation and the sprite it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    pub animation: Animation,
    pub sprite: Sprite,
}

/// Named animation states with a current selection.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    pub states: FxHashMap<String, AnimationEntry>,
    pub current: String,
}

impl AnimationState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            states: FxHashMap::default(),
            current: initial.into(),
        }
    }

    pub fn with_state(
        mut self,
        name: impl Into<String>,
        animation: Animation,
        sprite: Sprite,
    ) -> Self {
        self.states
            .insert(name.into(), AnimationEntry { animation, sprite });
        self
    }

    pub fn current_entry(&self) -> Option<&AnimationEntry> {
        self.states.get(&self.current)
    }

    pub fn current_entry_mut(&mut self) -> Option<&mut AnimationEntry> {
        self.states.get_mut(&self.current)
    }

    /// Switch state. Restarts the target animation when actually changing,
    /// so a re-entered state plays from its first frame.
    pub fn set_state(&mut self, name: &str) {
        if self.current != name {
            self.current = name.to_string();
            if let Some(entry) = self.states.get_mut(name) {
                entry.animation.restart();
            }
        }
    }
}

impl Component for AnimationState {}
