use crate::render::device::{GraphicsDevice, TextureId};

/// A device texture plus the dimensions the batch renderer needs to
/// normalize source rectangles into texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Upload tightly packed RGBA8 pixels and wrap the resulting handle.
    pub fn from_rgba8(
        device: &mut dyn GraphicsDevice,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        let id = device.create_texture(width, height, pixels);
        Self { id, width, height }
    }
}
