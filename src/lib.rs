//! Ember Engine library.
//!
//! A small 2D game engine core: an entity-component store with multi-kind
//! queries, a fixed-order frame loop, swept AABB physics, a batched quad
//! renderer behind a pluggable graphics device, a particle simulator, and
//! thin animation/script/audio systems. The host owns the window, the GPU
//! device, asset decoding, and the frame callback; it drives the engine by
//! calling [`ecs::World::update`] once per frame.

pub mod components;
pub mod ecs;
pub mod error;
pub mod events;
pub mod math;
pub mod render;
pub mod resources;
pub mod systems;

pub use error::EngineError;
