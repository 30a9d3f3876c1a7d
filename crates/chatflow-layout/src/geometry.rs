//! Pixel-space geometry primitives used by the layout engine.
//!
//! All coordinates are layout-local: relative to the top-left corner of
//! the message, not absolute screen coordinates.

/// Horizontal/vertical extent used for the unbounded sides of line
/// rectangles, so point queries at the message edges always match a line.
pub const UNBOUNDED: f32 = 100_000.0;

/// A 2D point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A 2D size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// A rectangle spanning the full horizontal sentinel range, bounded
    /// vertically to `[y, y + height)`. Used for line records.
    pub fn spanning_line(y: f32, height: f32) -> Self {
        Self::new(-UNBOUNDED, y, 2.0 * UNBOUNDED, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    /// Move the top edge, keeping the bottom edge fixed.
    pub fn set_top(&mut self, top: f32) {
        self.height = self.bottom() - top;
        self.y = top;
    }

    /// Move the bottom edge, keeping the top edge fixed.
    pub fn set_bottom(&mut self, bottom: f32) {
        self.height = bottom - self.y;
    }

    /// Move the left edge, keeping the right edge fixed.
    pub fn set_left(&mut self, left: f32) {
        self.width = self.right() - left;
        self.x = left;
    }

    /// Move the right edge, keeping the left edge fixed.
    pub fn set_right(&mut self, right: f32) {
        self.width = right - self.x;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Check whether a point lies within this rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, so adjacent lines never both claim a boundary point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Outer margins around a message, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 4.0,
            right: 8.0,
            bottom: 4.0,
            left: 8.0,
        }
    }
}

impl Margins {
    /// Total horizontal margin.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}
