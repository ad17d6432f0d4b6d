//! Shared math types for the engine.
//!
//! World space is Y-down: positions grow rightward and downward, matching
//! screen coordinates. Rectangles are axis-aligned, anchored at their
//! top-left corner, and use half-open interval semantics for overlap tests
//! (touching edges do not overlap).

use serde::{Deserialize, Serialize};

/// 2D vector in world units.
pub type Vec2 = nalgebra::Vector2<f32>;

/// Shorthand for `Vec2::new`.
#[inline]
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect from a top-left corner and a size vector.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.x,
            h: size.y,
        }
    }

    pub fn origin(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.w, self.h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// A rect with zero (or negative) extent on either axis collides with
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Return a copy shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Half-open AABB overlap test. Touching edges count as non-overlapping,
    /// and empty rects never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.left() >= other.right() {
            return false;
        }
        if self.right() <= other.left() {
            return false;
        }
        if self.top() >= other.bottom() {
            return false;
        }
        if self.bottom() <= other.top() {
            return false;
        }
        true
    }

    /// True if this rect lies entirely to the left of `other` on the X axis.
    pub fn is_left_of(&self, other: &Rect) -> bool {
        self.right() <= other.left()
    }

    /// True if this rect lies entirely to the right of `other` on the X axis.
    pub fn is_right_of(&self, other: &Rect) -> bool {
        self.left() >= other.right()
    }
}

/// Four-channel float color, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between `self` and `other` at `t` in [0, 1].
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Column-major 4x4 matrix, the layout uniform buffers expect.
pub type Mat4 = nalgebra::Matrix4<f32>;
