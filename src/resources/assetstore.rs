//! Asset lookup resource.
//!
//! Maps logical names to handles the host produced while loading, before
//! the frame loop started. The core never decodes images or audio itself
//! and never retries a failed load; a miss at frame time is logged and the
//! consumer skips that draw or sound.

use log::warn;
use rustc_hash::FxHashMap;

use crate::render::texture::Texture;

/// Opaque handle to a decoded audio buffer owned by the host's audio thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

#[derive(Debug, Default)]
pub struct AssetStore {
    textures: FxHashMap<String, Texture>,
    sounds: FxHashMap<String, SoundHandle>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_texture(&mut self, name: impl Into<String>, texture: Texture) {
        self.textures.insert(name.into(), texture);
    }

    /// Texture for `name`. Misses are logged once per call and skipped by
    /// the caller, never fatal.
    pub fn texture(&self, name: &str) -> Option<&Texture> {
        let texture = self.textures.get(name);
        if texture.is_none() {
            warn!("texture '{}' not found in asset store", name);
        }
        texture
    }

    pub fn insert_sound(&mut self, name: impl Into<String>, sound: SoundHandle) {
        self.sounds.insert(name.into(), sound);
    }

    pub fn sound(&self, name: &str) -> Option<SoundHandle> {
        let sound = self.sounds.get(name).copied();
        if sound.is_none() {
            warn!("sound '{}' not found in asset store", name);
        }
        sound
    }
}
