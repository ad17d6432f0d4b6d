//! Entity-component-system core.
//!
//! Submodules:
//! - [`entity`] – opaque entity ids and the free-list allocator
//! - [`store`] – per-kind sparse component maps behind type erasure
//! - [`query`] – lazy and eager multi-kind queries
//! - [`system`] – the per-frame system trait and stage ordering
//! - [`world`] – the container tying it all together

pub mod entity;
pub mod query;
pub mod store;
pub mod system;
pub mod world;

pub use entity::Entity;
pub use query::{ComponentQuery, QueryIter};
pub use store::{Component, ComponentStore};
pub use system::{System, SystemStage};
pub use world::World;
