//! Dynamic body and collider components.
//!
//! A [`PhysicsBody`] takes part in the swept collision step. Its
//! [`Collider`] describes a rectangle relative to the owning transform's
//! position; all collision math runs on that derived world rectangle.
//!
//! Acceleration has impulse semantics: forces accumulate into it during a
//! frame and the physics step consumes and zeroes it after integrating.

use crate::ecs::store::Component;
use crate::math::{Rect, Vec2, vec2};

/// Axis-aligned collision rectangle, offset and sized relative to the
/// owning transform's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Detection-only colliders are ignored by the swept resolver.
    pub is_trigger: bool,
    /// Rectangle extents in world units. A zero extent on either axis makes
    /// the body non-colliding (valid for visual-only entities).
    pub size: Vec2,
    /// Offset from the transform position to the rectangle's top-left.
    pub offset: Vec2,
}

impl Collider {
    /// Create a collider with the given size and no offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            is_trigger: false,
            size: vec2(width, height),
            offset: Vec2::zeros(),
        }
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = vec2(x, y);
        self
    }

    pub fn trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// The world-space collision rectangle for a body anchored at
    /// `position`.
    pub fn rect_at(&self, position: Vec2) -> Rect {
        Rect::from_origin_size(position + self.offset, self.size)
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            is_trigger: false,
            size: Vec2::zeros(),
            offset: Vec2::zeros(),
        }
    }
}

/// Dynamic or solid physics body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsBody {
    /// One-shot acceleration accumulator, consumed each physics step.
    pub acceleration: Vec2,
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Solid bodies never move and only participate as obstacles.
    pub is_solid: bool,
    pub collider: Collider,
}

impl PhysicsBody {
    pub fn new(collider: Collider) -> Self {
        Self {
            acceleration: Vec2::zeros(),
            velocity: Vec2::zeros(),
            is_solid: false,
            collider,
        }
    }

    /// A static obstacle: never integrates, never moves.
    pub fn solid(collider: Collider) -> Self {
        Self {
            is_solid: true,
            ..Self::new(collider)
        }
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = vec2(x, y);
        self
    }
}

impl Component for PhysicsBody {}
