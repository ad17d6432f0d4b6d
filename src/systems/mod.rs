//! Frame systems, one per [`crate::ecs::SystemStage`].
//!
//! Submodules:
//! - [`physics`] – gravity integration and swept AABB collision resolution
//! - [`animation`] – sprite-sheet frame advancement
//! - [`script`] – per-entity behavior scripts and event delivery
//! - [`particle`] – emitter pools: emission, integration, interpolation
//! - [`audio`] – forwards queued audio commands to the host's audio thread
//! - [`render`] – draws level tiles, sprites, and particles through the
//!   batch renderer

pub mod animation;
pub mod audio;
pub mod particle;
pub mod physics;
pub mod render;
pub mod script;

pub use animation::AnimationSystem;
pub use audio::AudioSystem;
pub use particle::ParticleSystem;
pub use physics::PhysicsSystem;
pub use render::RenderSystem;
pub use script::ScriptSystem;
