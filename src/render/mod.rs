//! Rendering primitives: the device abstraction, texture handles, and the
//! batched quad renderer the render system draws through.

pub mod batch;
pub mod device;
pub mod texture;

pub use batch::{BatchRenderer, BatchStats, MAX_QUADS_PER_BATCH};
pub use device::{BufferId, GraphicsDevice, LoadOp, NullGraphicsDevice, TextureId};
pub use texture::Texture;
