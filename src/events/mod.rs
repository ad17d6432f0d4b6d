//! Events exchanged between systems and game scripts.
//!
//! Game events are published into the [`EventQueue`] resource during a
//! frame and delivered to every script's `on_event` at the start of the
//! script stage, then discarded. Audio commands travel a separate channel,
//! see [`audio`].

pub mod audio;

pub use audio::{AudioCmd, AudioOutbox};

/// A gameplay event visible to scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A level has (re)started.
    LevelStart { level_number: u32 },
}

/// Frame-scoped event queue, installed as a world resource.
///
/// Events published during frame N are delivered during frame N's script
/// stage (or frame N+1's, when published after it) and dropped once
/// delivered. Nothing is retained across delivery.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
