//! Batched quad renderer.
//!
//! Draw requests accumulate quads into a CPU staging buffer and a
//! texture-slot table; a flush uploads only the pending vertex bytes and
//! issues a single indexed draw. Flushes happen when the quad limit or the
//! texture-slot limit is hit mid-frame, and unconditionally at `end`. The
//! first flush of a frame clears the target, later flushes load onto it, so
//! multiple batches compose into one visible image.
//!
//! Slot numbering is fixed: slot 0 always holds a 1x1 opaque white fallback
//! (used by `draw_rect` and bound to every slot no batch texture occupies),
//! slots 1..=15 are assigned to distinct textures in first-use order.

use arrayvec::ArrayVec;
use bytemuck::{Pod, Zeroable};

use crate::components::camera::Camera;
use crate::error::EngineError;
use crate::math::{Color, Rect};
use crate::render::device::{
    BufferId, BufferKind, DrawPass, GraphicsDevice, LoadOp, MAX_TEXTURE_SLOTS, TextureId,
};
use crate::render::texture::Texture;

pub const MAX_QUADS_PER_BATCH: usize = 1024;
pub const VERTICES_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = 6;
const MAX_VERTICES_PER_BATCH: usize = MAX_QUADS_PER_BATCH * VERTICES_PER_QUAD;

/// Target color for the frame's first flush.
const CLEAR_COLOR: Color = Color::new(0.3, 0.3, 0.4, 1.0);

/// One staged vertex, laid out exactly as the vertex buffer expects it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
    /// Texture slot as f32; interpolation-safe for flat vertex attributes.
    pub texture_slot: f32,
    pub color: [f32; 4],
}

/// Per-frame render counters, reset at `begin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub quads_rendered: usize,
    pub vertices_rendered: usize,
    pub batches: usize,
}

impl BatchStats {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct BatchRenderer<D: GraphicsDevice> {
    device: D,
    vertices: Box<[Vertex]>,
    pending_quads: usize,
    /// Textures bound this batch, in first-use order. Index i occupies
    /// slot i + 1; slot 0 is the white fallback.
    slots: ArrayVec<TextureId, { MAX_TEXTURE_SLOTS - 1 }>,
    white: Texture,
    vertex_buffer: BufferId,
    index_buffer: BufferId,
    view_matrix_buffer: BufferId,
    pub stats: BatchStats,
}

impl<D: GraphicsDevice> BatchRenderer<D> {
    pub fn new(mut device: D) -> Self {
        let vertex_buffer = device.create_buffer(
            BufferKind::Vertex,
            MAX_VERTICES_PER_BATCH * std::mem::size_of::<Vertex>(),
        );
        let index_buffer = device.create_buffer(
            BufferKind::Index,
            MAX_QUADS_PER_BATCH * INDICES_PER_QUAD * std::mem::size_of::<u32>(),
        );
        let view_matrix_buffer = device.create_buffer(BufferKind::Uniform, 64);

        // The index pattern never changes, so it uploads once. Quad i owns
        // vertices 4i..4i+3 as two triangles.
        let mut indices = vec![0u32; MAX_QUADS_PER_BATCH * INDICES_PER_QUAD];
        for i in 0..MAX_QUADS_PER_BATCH {
            let v = (i * VERTICES_PER_QUAD) as u32;
            let base = i * INDICES_PER_QUAD;
            indices[base] = v;
            indices[base + 1] = v + 1;
            indices[base + 2] = v + 2;
            indices[base + 3] = v + 1;
            indices[base + 4] = v + 3;
            indices[base + 5] = v + 2;
        }
        device.write_buffer(index_buffer, 0, bytemuck::cast_slice(&indices));

        let white = Texture::from_rgba8(&mut device, 1, 1, &[255, 255, 255, 255]);

        Self {
            device,
            vertices: vec![Vertex::zeroed(); MAX_VERTICES_PER_BATCH].into_boxed_slice(),
            pending_quads: 0,
            slots: ArrayVec::new(),
            white,
            vertex_buffer,
            index_buffer,
            view_matrix_buffer,
            stats: BatchStats::default(),
        }
    }

    /// Start a frame: reset stats and upload the camera's view-projection
    /// matrix. Fails if the previous frame left quads unflushed; that is a
    /// programmer error, not a recoverable condition. A failed begin leaves
    /// the previous frame's stats readable.
    pub fn begin(&mut self, camera: &Camera) -> Result<(), EngineError> {
        if self.pending_quads != 0 {
            return Err(EngineError::InvalidBatchState {
                pending: self.pending_quads,
            });
        }
        self.stats.clear();
        let view_projection = camera.view_projection();
        self.device.write_buffer(
            self.view_matrix_buffer,
            0,
            bytemuck::cast_slice(view_projection.as_slice()),
        );
        Ok(())
    }

    /// Flush whatever is pending, unconditionally.
    pub fn end(&mut self) {
        self.flush();
    }

    /// Stage one textured quad. `src` is in texels and gets normalized by
    /// the texture dimensions; `dst` is in world units. A full staging
    /// buffer or slot table flushes before the quad is staged.
    pub fn draw_sprite(
        &mut self,
        texture: &Texture,
        src: Rect,
        dst: Rect,
        color: Color,
        flipped: bool,
    ) {
        if self.pending_quads >= MAX_QUADS_PER_BATCH {
            self.flush();
        }
        let slot = self.texture_slot(texture) as f32;

        let tex_width = texture.width as f32;
        let tex_height = texture.height as f32;
        let (u_left, u_right) = if flipped {
            ((src.x + src.w) / tex_width, src.x / tex_width)
        } else {
            (src.x / tex_width, (src.x + src.w) / tex_width)
        };
        let v_top = src.y / tex_height;
        let v_bottom = (src.y + src.h) / tex_height;

        let base = self.pending_quads * VERTICES_PER_QUAD;
        self.set_vertex(base, dst.x, dst.y, u_left, v_top, slot, color);
        self.set_vertex(base + 1, dst.x + dst.w, dst.y, u_right, v_top, slot, color);
        self.set_vertex(base + 2, dst.x, dst.y + dst.h, u_left, v_bottom, slot, color);
        self.set_vertex(
            base + 3,
            dst.x + dst.w,
            dst.y + dst.h,
            u_right,
            v_bottom,
            slot,
            color,
        );

        self.pending_quads += 1;
    }

    /// Solid-color quad via the white fallback texture.
    pub fn draw_rect(&mut self, dst: Rect, color: Color) {
        let white = self.white;
        self.draw_sprite(&white, Rect::new(0.0, 0.0, 1.0, 1.0), dst, color, false);
    }

    pub fn white_texture(&self) -> &Texture {
        &self.white
    }

    pub fn pending_quads(&self) -> usize {
        self.pending_quads
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    fn set_vertex(&mut self, index: usize, x: f32, y: f32, u: f32, v: f32, slot: f32, color: Color) {
        self.vertices[index] = Vertex {
            position: [x, y],
            tex_coord: [u, v],
            texture_slot: slot,
            color: color.to_array(),
        };
    }

    /// Slot for `texture` within the current batch: 0 for the white
    /// fallback, an existing assignment when already bound, otherwise the
    /// next free slot. Exhausted slots force a flush first.
    fn texture_slot(&mut self, texture: &Texture) -> usize {
        if texture.id == self.white.id {
            return 0;
        }
        if let Some(index) = self.slots.iter().position(|&id| id == texture.id) {
            return index + 1;
        }
        if self.slots.is_full() {
            self.flush();
        }
        self.slots.push(texture.id);
        self.slots.len()
    }

    fn flush(&mut self) {
        let mut textures = [self.white.id; MAX_TEXTURE_SLOTS];
        for (index, &id) in self.slots.iter().enumerate() {
            textures[index + 1] = id;
        }

        // Only the bytes actually staged this batch go up.
        let staged = &self.vertices[..self.pending_quads * VERTICES_PER_QUAD];
        self.device
            .write_buffer(self.vertex_buffer, 0, bytemuck::cast_slice(staged));

        let load_op = if self.stats.batches == 0 {
            LoadOp::Clear(CLEAR_COLOR)
        } else {
            LoadOp::Load
        };
        self.device.submit(&DrawPass {
            vertex_buffer: self.vertex_buffer,
            index_buffer: self.index_buffer,
            uniform_buffer: self.view_matrix_buffer,
            textures,
            index_count: (self.pending_quads * INDICES_PER_QUAD) as u32,
            load_op,
        });

        self.stats.quads_rendered += self.pending_quads;
        self.stats.vertices_rendered += self.pending_quads * VERTICES_PER_QUAD;
        self.stats.batches += 1;

        self.pending_quads = 0;
        self.slots.clear();
    }
}
