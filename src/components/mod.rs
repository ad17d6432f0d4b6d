//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world. Components define data such as position, rendering,
//! collision, animation, and particle emission.
//!
//! Submodules overview:
//! - [`activation`] – marker for temporarily disabling an entity's rendering
//! - [`animation`] – sprite-sheet playback state and named animation states
//! - [`camera`] – orthographic 2D camera and the main-camera marker
//! - [`level`] – immutable tile layers and static collision geometry
//! - [`particleemitter`] – fixed-pool particle emitter
//! - [`physicsbody`] – dynamic body with collider, velocity, and one-shot
//!   acceleration
//! - [`script`] – per-entity behavior as a boxed trait object
//! - [`sprite`] – textured or flat-colored quad
//! - [`tag`] – name component for entity lookup
//! - [`transform`] – world position and extents

pub mod activation;
pub mod animation;
pub mod camera;
pub mod level;
pub mod particleemitter;
pub mod physicsbody;
pub mod script;
pub mod sprite;
pub mod tag;
pub mod transform;
