//! Rectangle geometry
//!
//! Axis-aligned rectangles in canvas coordinates (y grows downward).

use glam::Vec2;

/// An axis-aligned rectangle defined by its top-left origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// The zero rectangle.
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Create a rectangle from position and size components.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Whether the rectangle covers no area.
    ///
    /// Non-finite components count as empty so callers can skip drawing
    /// without inspecting the values themselves.
    pub fn is_empty(&self) -> bool {
        !(self.origin.is_finite() && self.size.is_finite())
            || self.size.x <= 0.0
            || self.size.y <= 0.0
    }

    /// Check if a point lies inside the rectangle (max edges exclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }

    /// Intersection of two rectangles, or `None` if they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        let rect = Rect::from_origin_size(min, max - min);
        if rect.is_empty() {
            None
        } else {
            Some(rect)
        }
    }
}
