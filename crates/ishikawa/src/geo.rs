//! Geometry primitives for fishbone layout and rendering.
//!
//! Diagram coordinates use the plotting convention:
//! - x increases rightward
//! - y increases upward
//! - the drawable region is x ∈ [-5, 5], y ∈ [-5, 5]
//!
//! Only the SVG renderer flips y when mapping onto the viewport; layout
//! code never sees screen coordinates. `Rect` is the exception: it lives
//! in viewport pixels (top-left origin) because it only exists to describe
//! estimated label boxes during rendering.

/// A 2D point in diagram data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point displaced by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A label displacement in font-relative units: the actual pixel offset is
/// `(dx * font_size, dy * font_size)`, with dy measured upward like data y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontOffset {
    pub dx: f64,
    pub dy: f64,
}

impl FontOffset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// An axis-aligned rectangle in viewport pixels (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
