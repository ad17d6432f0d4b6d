//! Orthographic 2D camera.

use nalgebra::Vector3;

use crate::ecs::store::Component;
use crate::math::{Mat4, Vec2};

/// World-space camera: a position and the visible world dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Top-left of the visible region in world units.
    pub position: Vec2,
    /// Width and height of the visible region in world units.
    pub dimensions: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, dimensions: Vec2) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    /// Column-major view-projection matrix mapping the visible world region
    /// onto clip space, Y-down.
    pub fn view_projection(&self) -> Mat4 {
        // Bottom/top swapped relative to the GL convention flips Y so that
        // world Y grows downward on screen.
        let projection =
            Mat4::new_orthographic(0.0, self.dimensions.x, self.dimensions.y, 0.0, 0.1, 100.0);
        let view = Mat4::new_translation(&Vector3::new(-self.position.x, -self.position.y, 0.0));
        projection * view
    }
}

/// Marks an entity as carrying a camera. Exactly one entity should have
/// `is_main_camera` set at any time; rendering fails without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraComponent {
    pub camera: Camera,
    pub is_main_camera: bool,
}

impl CameraComponent {
    pub fn main(camera: Camera) -> Self {
        Self {
            camera,
            is_main_camera: true,
        }
    }
}

impl Component for CameraComponent {}
