//! Single-axis clip pass.
//!
//! An [`AxisClipper`] clips a polygon against a pair of parallel bounds
//! `low <= coord <= high` on one axis, leaving the other coordinate untouched
//! except at boundary crossings. Running it once per axis clips against a
//! rectangle.
//!
//! # Edge walk
//!
//! Every directed edge `P1 -> P2` is visited once, in polygon order, closing
//! from the last vertex back to the first. An edge is *descending* when `P1`
//! lies above `P2` on the axis and *ascending* otherwise. A descending edge
//! meets `high` first and `low` last; an ascending edge the reverse. Each edge
//! emits, in the order met along the edge:
//!
//! 1. an entry crossing on the near bound, if `P1` is beyond it,
//! 2. otherwise `P1` itself (the pass-through vertex),
//! 3. an exit crossing on the far bound, if `P2` is beyond it.
//!
//! Edges entirely beyond one bound are rejected before any arithmetic.
//!
//! # Exactness
//!
//! Crossings are computed with integer multiply-then-truncating-divide and are
//! always anchored at the endpoint lying *beyond* the bound:
//!
//! ```text
//! across = out.across + (in.across - out.across) * (bound - out.along) / (in.along - out.along)
//! ```
//!
//! The same edge walked in either direction therefore produces the same
//! crossing, bit for bit, so neighbouring polygons that share an edge agree on
//! where it leaves the window regardless of their winding.

use crate::error::{BufferKind, ClipError};
use crate::math::rect::ClipRect;
use crate::math::vertex::Vertex;

/// A coordinate axis of the integer plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis, bounded by `left` and `right`.
    X,
    /// Vertical axis, bounded by `top` and `bottom`.
    Y,
}

impl Axis {
    /// The coordinate being clipped.
    #[inline]
    pub fn along(self, v: Vertex) -> i16 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// The coordinate carried through (and interpolated at crossings).
    #[inline]
    pub fn across(self, v: Vertex) -> i16 {
        match self {
            Axis::X => v.y,
            Axis::Y => v.x,
        }
    }

    #[inline]
    fn vertex(self, along: i16, across: i16) -> Vertex {
        match self {
            Axis::X => Vertex::new(along, across),
            Axis::Y => Vertex::new(across, along),
        }
    }
}

/// Append-only writer over a fixed-capacity vertex slice.
///
/// Never writes past the end of the slice, and never stores a vertex equal to
/// the one before it. Truncating division can land two distinct crossings on
/// the same grid point; this is where they collapse.
pub(crate) struct Emitter<'a> {
    buffer: &'a mut [Vertex],
    len: usize,
    kind: BufferKind,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(buffer: &'a mut [Vertex], kind: BufferKind) -> Self {
        Self {
            buffer,
            len: 0,
            kind,
        }
    }

    #[inline]
    fn push(&mut self, v: Vertex) -> Result<(), ClipError> {
        if self.len > 0 && self.buffer[self.len - 1] == v {
            return Ok(());
        }
        let slot = self
            .buffer
            .get_mut(self.len)
            .ok_or(ClipError::Overflow(self.kind))?;
        *slot = v;
        self.len += 1;
        Ok(())
    }

    /// Closes the polygon and returns the number of vertices written.
    fn finish(self) -> usize {
        // The closing edge may end on the first vertex.
        if self.len > 1 && self.buffer[self.len - 1] == self.buffer[0] {
            self.len - 1
        } else {
            self.len
        }
    }
}

/// Clips polygons against `low <= coord <= high` on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisClipper {
    axis: Axis,
    low: i16,
    high: i16,
}

impl AxisClipper {
    /// Creates a pass for the given bounds. Requires `low <= high`.
    pub fn new(axis: Axis, low: i16, high: i16) -> Self {
        debug_assert!(low <= high, "axis bounds are inverted");
        Self { axis, low, high }
    }

    /// The pass that clips against `rect`'s bounds on `axis`.
    pub fn from_rect(axis: Axis, rect: &ClipRect) -> Self {
        let (low, high) = rect.axis_bounds(axis);
        Self::new(axis, low, high)
    }

    /// The axis this pass clips.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The `(low, high)` bounds, both inclusive.
    pub fn bounds(&self) -> (i16, i16) {
        (self.low, self.high)
    }

    /// Clips `source` into `output` and returns the number of vertices written.
    ///
    /// `output` needs room for `2 * source.len()` vertices in the worst case.
    /// Running out of room is reported as [`ClipError::Overflow`], with the
    /// contents of `output` unspecified.
    pub fn clip(&self, source: &[Vertex], output: &mut [Vertex]) -> Result<usize, ClipError> {
        self.clip_into(source, output, BufferKind::Output)
    }

    pub(crate) fn clip_into(
        &self,
        source: &[Vertex],
        buffer: &mut [Vertex],
        kind: BufferKind,
    ) -> Result<usize, ClipError> {
        let mut out = Emitter::new(buffer, kind);
        let Some(&first) = source.first() else {
            return Ok(0);
        };

        let mut p1 = first;
        for &p2 in source.iter().skip(1).chain(std::iter::once(&first)) {
            self.clip_edge(p1, p2, &mut out)?;
            p1 = p2;
        }

        Ok(out.finish())
    }

    #[inline]
    fn clip_edge(&self, p1: Vertex, p2: Vertex, out: &mut Emitter) -> Result<(), ClipError> {
        let (low, high) = (self.low, self.high);
        let a1 = self.axis.along(p1);
        let a2 = self.axis.along(p2);

        if a1 > a2 {
            // Descending: high is near, low is far.
            if a1 < low || a2 > high {
                return Ok(());
            }

            if a1 > high {
                // An edge ending exactly on the bound is entered at P2, which
                // the next edge emits.
                if a2 < high {
                    out.push(self.crossing(high, p1, p2))?;
                }
            } else {
                out.push(p1)?;
            }

            if a2 < low && a1.min(high) > low {
                out.push(self.crossing(low, p2, p1))?;
            }
        } else {
            // Ascending: low is near, high is far.
            if a2 < low || a1 > high {
                return Ok(());
            }

            if a1 < low {
                if a2 > low {
                    out.push(self.crossing(low, p1, p2))?;
                }
            } else {
                out.push(p1)?;
            }

            if a2 > high && a1.max(low) < high {
                out.push(self.crossing(high, p2, p1))?;
            }
        }

        Ok(())
    }

    /// Point where the edge between `outside` and `inside` meets `bound`.
    ///
    /// `outside` lies strictly beyond `bound` and `inside` does not, so the
    /// divisor is never zero and the result lies between the two endpoints.
    #[inline]
    fn crossing(&self, bound: i16, outside: Vertex, inside: Vertex) -> Vertex {
        let along_out = self.axis.along(outside) as i64;
        let along_in = self.axis.along(inside) as i64;
        let across_out = self.axis.across(outside) as i64;
        let across_in = self.axis.across(inside) as i64;

        // i64 `/` truncates toward zero.
        let across = across_out
            + (across_in - across_out) * (bound as i64 - along_out) / (along_in - along_out);

        self.axis.vertex(bound, across as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i16, y: i16) -> Vertex {
        Vertex::new(x, y)
    }

    fn run(pass: &AxisClipper, source: &[Vertex]) -> Vec<Vertex> {
        let mut out = vec![Vertex::ZERO; source.len() * 2];
        let n = pass.clip(source, &mut out).unwrap();
        out.truncate(n);
        out
    }

    #[test]
    fn test_x_pass_leaves_y_bounds_alone() {
        let pass = AxisClipper::new(Axis::X, 5, 15);
        let square = [v(0, 0), v(10, 0), v(10, 10), v(0, 10)];
        assert_eq!(run(&pass, &square), vec![v(5, 0), v(10, 0), v(10, 10), v(5, 10)]);
    }

    #[test]
    fn test_y_pass_clips_both_bounds() {
        let pass = AxisClipper::new(Axis::Y, 2, 8);
        let square = [v(0, 0), v(10, 0), v(10, 10), v(0, 10)];
        assert_eq!(
            run(&pass, &square),
            vec![v(10, 2), v(10, 8), v(0, 8), v(0, 2)]
        );
    }

    #[test]
    fn test_edge_spanning_both_bounds() {
        // The edge (0,0) -> (20,10) enters at x=5 and leaves at x=15. The exit
        // is interpolated from (20,10), so y=7.5 truncates to 8.
        let pass = AxisClipper::new(Axis::X, 5, 15);
        let tri = [v(0, 0), v(20, 10), v(0, 10)];
        assert_eq!(
            run(&pass, &tri),
            vec![v(5, 2), v(15, 8), v(15, 10), v(5, 10)]
        );
    }

    #[test]
    fn test_crossing_independent_of_direction() {
        // A two-vertex polygon walks the same segment forward and back.
        // Identical crossings collapse, leaving exactly one per bound.
        let pass = AxisClipper::new(Axis::X, 0, 10);
        let segment = [v(-7, 3), v(13, -8)];
        assert_eq!(run(&pass, &segment), vec![v(0, 0), v(10, -7)]);
    }

    #[test]
    fn test_crossing_truncates_toward_zero() {
        // Exact crossings at y = 1/3 and y = -1/3 both truncate to 0.
        let pass = AxisClipper::new(Axis::X, 0, 10);
        let up = [v(-1, 0), v(2, 1), v(2, -5)];
        assert_eq!(run(&pass, &up)[0], v(0, 0));
        let down = [v(-1, 0), v(2, -1), v(2, 5)];
        assert_eq!(run(&pass, &down)[0], v(0, 0));
    }

    #[test]
    fn test_rejected_polygon_emits_nothing() {
        let pass = AxisClipper::new(Axis::Y, 100, 200);
        let square = [v(0, 0), v(10, 0), v(10, 10), v(0, 10)];
        assert!(run(&pass, &square).is_empty());
    }

    #[test]
    fn test_empty_source() {
        let pass = AxisClipper::new(Axis::X, 0, 10);
        assert!(run(&pass, &[]).is_empty());
    }

    #[test]
    fn test_overflow_is_reported() {
        let pass = AxisClipper::new(Axis::X, -100, 100);
        let square = [v(0, 0), v(10, 0), v(10, 10), v(0, 10)];
        let mut out = [Vertex::ZERO; 3];
        assert_eq!(
            pass.clip(&square, &mut out),
            Err(ClipError::Overflow(BufferKind::Output))
        );
    }

    #[test]
    fn test_from_rect() {
        let rect = ClipRect::new(1, 2, 3, 4);
        assert_eq!(AxisClipper::from_rect(Axis::X, &rect).bounds(), (1, 2));
        assert_eq!(AxisClipper::from_rect(Axis::Y, &rect).bounds(), (3, 4));
    }
}
