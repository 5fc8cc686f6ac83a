//! Axis-aligned clip rectangle.

use super::vertex::Vertex;
use crate::clipper::Axis;

/// An axis-aligned rectangle with inclusive bounds.
///
/// `top` is the smaller y value (screen convention, y grows downward), so a
/// well-formed rectangle has `left <= right` and `top <= bottom`. Points lying
/// exactly on a bound are inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClipRect {
    pub left: i16,
    pub right: i16,
    pub top: i16,
    pub bottom: i16,
}

impl ClipRect {
    pub const fn new(left: i16, right: i16, top: i16, bottom: i16) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates a rectangle spanning `[x, x + width]` by `[y, y + height]`.
    ///
    /// Saturates at the edge of the coordinate range.
    pub fn from_origin_size(x: i16, y: i16, width: u16, height: u16) -> Self {
        let right = (x as i32 + width as i32).min(i16::MAX as i32) as i16;
        let bottom = (y as i32 + height as i32).min(i16::MAX as i32) as i16;
        Self::new(x, right, y, bottom)
    }

    /// Returns true if the bounds are ordered on both axes.
    pub fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    pub fn width(&self) -> i32 {
        self.right as i32 - self.left as i32
    }

    pub fn height(&self) -> i32 {
        self.bottom as i32 - self.top as i32
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v.x >= self.left && v.x <= self.right && v.y >= self.top && v.y <= self.bottom
    }

    /// Returns true if the two rectangles share at least one point.
    pub fn intersects(&self, other: &ClipRect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// The `(low, high)` bounds on the given axis.
    #[inline]
    pub fn axis_bounds(&self, axis: Axis) -> (i16, i16) {
        match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.top, self.bottom),
        }
    }
}
