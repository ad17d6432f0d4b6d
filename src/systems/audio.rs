//! Forwards queued audio commands to the host's audio thread.
//!
//! The core performs no mixing or device work. Commands accumulated in the
//! [`AudioOutbox`] resource are validated against the asset store where
//! possible and sent over a crossbeam channel; the host owns the receiving
//! thread and the actual audio backend. An unknown sound effect key is
//! logged and dropped, never fatal.

use crossbeam_channel::Sender;
use log::warn;

use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::events::{AudioCmd, AudioOutbox};
use crate::resources::assetstore::AssetStore;

pub struct AudioSystem {
    sender: Sender<AudioCmd>,
}

impl AudioSystem {
    pub fn new(sender: Sender<AudioCmd>) -> Self {
        Self { sender }
    }
}

impl System for AudioSystem {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn update(&mut self, world: &mut World, _dt: f32) -> Result<(), EngineError> {
        let commands = world
            .resource_mut::<AudioOutbox>()
            .map(|outbox| outbox.drain())
            .unwrap_or_default();

        for cmd in commands {
            if let AudioCmd::PlayFx { id } = &cmd {
                let known = world
                    .resource::<AssetStore>()
                    .is_none_or(|assets| assets.sound(id).is_some());
                if !known {
                    // AssetStore::sound already logged the miss.
                    continue;
                }
            }
            if self.sender.send(cmd).is_err() {
                warn!("audio channel closed; dropping remaining commands");
                break;
            }
        }

        Ok(())
    }
}
