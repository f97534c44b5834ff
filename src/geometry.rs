//! Pixel-space geometry: 2-D vectors, axis-aligned bounds and a text-box estimator.
//!
//! Screen coordinates grow right (x) and down (y).

use serde::{Deserialize, Serialize};

/// 2-D vector / point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// Straight up on screen.
    pub const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn times(self, n: f64) -> Vector2 {
        Vector2::new(self.x * n, self.y * n)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Vector2 {
        let m = self.magnitude();
        if m > 0.0 {
            self.times(1.0 / m)
        } else {
            Vector2::ZERO
        }
    }

    /// Both perpendiculars, `(-y, x)` first.
    pub fn normals(self) -> [Vector2; 2] {
        [Vector2::new(-self.y, self.x), Vector2::new(self.y, -self.x)]
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle in degrees, clockwise from the positive x axis (screen space).
    pub fn angle_deg(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn distance(a: Vector2, b: Vector2) -> f64 {
        Vector2::distance_sq(a, b).sqrt()
    }

    pub fn distance_sq(a: Vector2, b: Vector2) -> f64 {
        let d = a.subtract(b);
        d.dot(d)
    }

    /// Squared distance from `p` to the closed segment `a..b`.
    pub fn distance_from_point_to_segment_sq(p: Vector2, a: Vector2, b: Vector2) -> f64 {
        let ab = b.subtract(a);
        let len_sq = ab.dot(ab);
        if len_sq == 0.0 {
            return Vector2::distance_sq(p, a);
        }
        let t = (p.subtract(a).dot(ab) / len_sq).clamp(0.0, 1.0);
        Vector2::distance_sq(p, a.add(ab.times(t)))
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Estimated box of `text` drawn at `font_size` with its baseline-left at `pos`.
    ///
    /// Width uses the same 0.6·em-per-character heuristic as the rest of the crate;
    /// the box spans one em above the baseline.
    pub fn for_text(text: &str, pos: Vector2, font_size: f64) -> Self {
        let width = estimate_text_width(text, font_size);
        Self::new(pos.x, pos.y - font_size, width, font_size)
    }

    pub fn left(&self) -> f64 {
        self.x
    }
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    pub fn top(&self) -> f64 {
        self.y
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn with_x(&self, x: f64) -> Self {
        Self::new(x, self.y, self.width, self.height)
    }

    pub fn with_y(&self, y: f64) -> Self {
        Self::new(self.x, y, self.width, self.height)
    }

    /// Overlap test; shared edges count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.bottom() < self.top()
            || other.top() > self.bottom())
    }

    /// True when `other` lies inside `self`, allowing `tolerance` pixels of overhang.
    pub fn encloses(&self, other: &Bounds, tolerance: f64) -> bool {
        other.left() >= self.left() - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() >= self.top() - tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Heuristic pixel width of a single line of text (no font metrics available).
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.60
}
