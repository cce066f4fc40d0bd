// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint-angle geometry.
//!
//! The only computed logic in the pipeline: converting three 2D landmark
//! points into the interior angle at the middle point, in degrees.

/// A 2D point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point2 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Calculate the interior angle at vertex `b` formed by points `a`-`b`-`c`.
///
/// The angle is the absolute difference of the `atan2` headings of the rays
/// `b -> c` and `b -> a`, folded into [0°, 180°]. Degenerate input (coincident
/// points) yields a finite angle rather than an error; `atan2(0, 0)` is 0.
///
/// # Arguments
///
/// * `a` - Proximal point.
/// * `b` - Vertex point (the joint).
/// * `c` - Distal point.
///
/// # Returns
///
/// The angle at `b` in degrees, in the range [0.0, 180.0].
#[must_use]
pub fn joint_angle(a: Point2, b: Point2, c: Point2) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle
}
