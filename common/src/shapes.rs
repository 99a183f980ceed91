use rand::Rng;
use std::fmt::Debug;

pub trait Shape: Debug {
    /// Axis-aligned box enclosing the shape in world space.
    fn bounding_box(&self) -> Rectangle;
}

/// Axis-aligned rectangle stored as center + size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            x: (min_x + max_x) * 0.5,
            y: (min_y + max_y) * 0.5,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.left(), self.top())
    }

    pub fn bottom_right(&self) -> (f32, f32) {
        (self.right(), self.bottom())
    }

    /// Zero-area, negative or non-finite rectangles can never collide.
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Edges touching counts as intersecting.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Check that `inner` lies entirely within `self`.
    pub fn contains_rectangle(&self, inner: &Rectangle) -> bool {
        self.left() <= inner.left()
            && self.right() >= inner.right()
            && self.top() <= inner.top()
            && self.bottom() >= inner.bottom()
    }

    /// Quadrant `index` of this rectangle: 0 top-left, 1 top-right,
    /// 2 bottom-left, 3 bottom-right.
    pub fn quadrant(&self, index: usize) -> Rectangle {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let dx = if index & 1 == 0 { -half_w / 2.0 } else { half_w / 2.0 };
        let dy = if index & 2 == 0 { -half_h / 2.0 } else { half_h / 2.0 };
        Rectangle {
            x: self.x + dx,
            y: self.y + dy,
            width: half_w,
            height: half_h,
        }
    }

    pub fn expand_to_include(&mut self, other: &Rectangle) {
        let left = f32::min(self.left(), other.left());
        let right = f32::max(self.right(), other.right());
        let top = f32::min(self.top(), other.top());
        let bottom = f32::max(self.bottom(), other.bottom());
        self.x = (left + right) / 2.0;
        self.y = (top + bottom) / 2.0;
        self.width = right - left;
        self.height = bottom - top;
    }

    /// Random rectangle of the given size that fits inside `self`.
    pub fn get_random_rect_inside<R: Rng>(&self, width: f32, height: f32, rng: &mut R) -> Rectangle {
        Rectangle::new(
            self._safe_randf32(rng, self.left() + width / 2.0, self.right() - width / 2.0),
            self._safe_randf32(rng, self.top() + height / 2.0, self.bottom() - height / 2.0),
            width,
            height,
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn intersects(&self, other: &Circle) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let reach = self.radius + other.radius;
        dx * dx + dy * dy <= reach * reach
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.radius * 2.0, self.radius * 2.0)
    }
}

/// Oriented bounding box: center, half extents and a rotation in radians.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Obb {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub rotation: f32,
}

impl Obb {
    pub fn new(x: f32, y: f32, half_width: f32, half_height: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            half_width,
            half_height,
            rotation,
        }
    }

    pub fn axis_aligned(rect: &Rectangle) -> Self {
        Self::new(rect.x, rect.y, rect.width / 2.0, rect.height / 2.0, 0.0)
    }

    /// Circle through the box corners.
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.half_width.hypot(self.half_height))
    }

    /// Non-finite fields or a non-positive half extent. Checked on the box
    /// itself: a rotated line still has an enclosing box with area.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.half_width.is_finite()
            && self.half_height.is_finite()
            && self.rotation.is_finite();
        !finite || self.half_width <= 0.0 || self.half_height <= 0.0
    }
}

impl Shape for Obb {
    fn bounding_box(&self) -> Rectangle {
        let (sin, cos) = self.rotation.sin_cos();
        let extent_x = self.half_width * cos.abs() + self.half_height * sin.abs();
        let extent_y = self.half_width * sin.abs() + self.half_height * cos.abs();
        Rectangle::new(self.x, self.y, extent_x * 2.0, extent_y * 2.0)
    }
}
