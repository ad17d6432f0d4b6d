//! Commands sent *to* the host's audio thread.
//!
//! The engine never touches an audio device. Systems and scripts enqueue
//! [`AudioCmd`] values; the audio system forwards them over a
//! crossbeam channel whose receiving end lives on a host-owned thread.

/// One command for the audio backend.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Play a one-shot sound effect by asset-store key.
    PlayFx { id: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    /// Tells the audio thread to drain and exit.
    Shutdown,
}

/// World resource collecting audio commands during a frame. The audio
/// system drains it and forwards everything to its channel.
#[derive(Debug, Default)]
pub struct AudioOutbox {
    pending: Vec<AudioCmd>,
}

impl AudioOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: AudioCmd) {
        self.pending.push(cmd);
    }

    pub fn drain(&mut self) -> Vec<AudioCmd> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
