//! Graphics device abstraction.
//!
//! The engine core never talks to a GPU API directly. The host supplies an
//! implementation of [`GraphicsDevice`] wrapping whatever backend it uses;
//! the batch renderer drives it through a handful of operations: buffer
//! creation, partial buffer uploads, texture creation, and one indexed draw
//! submission per flush. [`NullGraphicsDevice`] records every call and backs
//! the headless tests.

use crate::math::Color;

/// Opaque handle to a device buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

/// Opaque handle to a device texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Index,
    Uniform,
}

/// What happens to the render target before a submitted pass draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOp {
    /// Clear the target to a color first.
    Clear(Color),
    /// Keep whatever previous passes drew.
    Load,
}

/// Number of texture bind slots a draw pass carries. Hard platform limit;
/// the batch renderer flushes rather than exceed it.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// One indexed draw submission. Every slot in `textures` must carry a valid
/// texture; the renderer fills unused slots with its white fallback because
/// the underlying APIs reject unbound slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPass {
    pub vertex_buffer: BufferId,
    pub index_buffer: BufferId,
    pub uniform_buffer: BufferId,
    pub textures: [TextureId; MAX_TEXTURE_SLOTS],
    pub index_count: u32,
    pub load_op: LoadOp,
}

/// Host-provided rendering backend.
pub trait GraphicsDevice {
    fn create_buffer(&mut self, kind: BufferKind, size: usize) -> BufferId;

    /// Upload `data` into `buffer` starting at `offset` bytes. Partial
    /// writes are the common case; flush uploads only the pending range.
    fn write_buffer(&mut self, buffer: BufferId, offset: usize, data: &[u8]);

    /// Create a texture from tightly packed RGBA8 pixels.
    fn create_texture(&mut self, width: u32, height: u32, pixels: &[u8]) -> TextureId;

    /// Issue one indexed draw.
    fn submit(&mut self, pass: &DrawPass);
}

/// Recording device for headless runs and tests. Allocates ids, remembers
/// buffer sizes and writes, and keeps every submitted pass in order.
#[derive(Debug, Default)]
pub struct NullGraphicsDevice {
    next_id: u32,
    pub buffers: Vec<(BufferId, BufferKind, usize)>,
    pub writes: Vec<(BufferId, usize, usize)>,
    pub textures: Vec<(TextureId, u32, u32)>,
    pub passes: Vec<DrawPass>,
}

impl NullGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl GraphicsDevice for NullGraphicsDevice {
    fn create_buffer(&mut self, kind: BufferKind, size: usize) -> BufferId {
        let id = BufferId(self.bump());
        self.buffers.push((id, kind, size));
        id
    }

    fn write_buffer(&mut self, buffer: BufferId, offset: usize, data: &[u8]) {
        self.writes.push((buffer, offset, data.len()));
    }

    fn create_texture(&mut self, width: u32, height: u32, pixels: &[u8]) -> TextureId {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        let id = TextureId(self.bump());
        self.textures.push((id, width, height));
        id
    }

    fn submit(&mut self, pass: &DrawPass) {
        self.passes.push(*pass);
    }
}
