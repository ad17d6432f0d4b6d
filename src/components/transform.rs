use crate::ecs::store::Component;
use crate::math::{Vec2, vec2};

/// World position and axis-aligned extents.
///
/// `scale` doubles as the entity's visual rectangle size. Collision math
/// never uses `scale` directly once a collider is present; it works on the
/// collider's derived rectangle instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Top-left anchor of the entity in world units.
    pub position: Vec2,
    /// Width and height of the entity's visual rectangle.
    pub scale: Vec2,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: vec2(x, y),
            scale: vec2(1.0, 1.0),
        }
    }

    pub fn with_scale(mut self, w: f32, h: f32) -> Self {
        self.scale = vec2(w, h);
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Component for Transform {}
