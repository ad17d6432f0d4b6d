//! Shared state installed into the world's resource map.
//!
//! Submodules:
//! - [`assetstore`] – logical name to texture/sound handle resolution
//! - [`engineconfig`] – INI-backed engine settings
//! - [`input`] – host-fed keyboard state polled by scripts

pub mod assetstore;
pub mod engineconfig;
pub mod input;

pub use assetstore::AssetStore;
pub use engineconfig::EngineConfig;
pub use input::{InputState, Key};
