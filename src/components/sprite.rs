use crate::ecs::store::Component;
use crate::math::{Color, Vec2, vec2};

/// Textured or flat-colored quad.
///
/// `texture` names an entry in the
/// [`AssetStore`](crate::resources::assetstore::AssetStore); when it is
/// `None` the render system draws a solid rect in `color` instead. The
/// source rectangle inside the texture is `(tex_coord, width, height)` in
/// texels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: Option<String>,
    /// Top-left of the source rectangle inside the texture, in texels.
    pub tex_coord: Vec2,
    /// Source rectangle width in texels.
    pub width: f32,
    /// Source rectangle height in texels.
    pub height: f32,
    pub color: Color,
    /// Mirror horizontally (sprite sheets usually face one way).
    pub flipped: bool,
}

impl Sprite {
    pub fn new(texture: impl Into<String>, tex_coord: Vec2, width: f32, height: f32) -> Self {
        Self {
            texture: Some(texture.into()),
            tex_coord,
            width,
            height,
            color: Color::WHITE,
            flipped: false,
        }
    }

    /// An untextured sprite drawn as a solid colored rect.
    pub fn colored(color: Color) -> Self {
        Self {
            texture: None,
            tex_coord: vec2(0.0, 0.0),
            width: 0.0,
            height: 0.0,
            color,
            flipped: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Component for Sprite {}
