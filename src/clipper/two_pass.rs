//! Two-pass rectangle clipping.
//!
//! Clipping against a rectangle is two [`AxisClipper`] passes run back to
//! back: left/right into a scratch buffer, then top/bottom from the scratch
//! buffer into the output. If the first pass leaves fewer than three vertices
//! the polygon is already invisible and the second pass is skipped.

use super::axis::{Axis, AxisClipper};
use crate::error::{BufferKind, ClipError};
use crate::math::rect::ClipRect;
use crate::math::vertex::Vertex;

/// Fewer vertices than this do not enclose any area.
pub const MIN_VISIBLE_VERTICES: usize = 3;

/// Returns true if a clip result of `count` vertices is a visible polygon.
#[inline]
pub fn is_visible(count: usize) -> bool {
    count >= MIN_VISIBLE_VERTICES
}

/// Scratch capacity needed to clip a polygon of `n` vertices.
///
/// The first pass emits at most two vertices per edge.
pub const fn required_scratch_capacity(n: usize) -> usize {
    2 * n
}

/// Smallest output buffer [`RectClipper::clip_into`] accepts for a polygon of
/// `n` vertices.
///
/// Enough for every convex polygon with four or more vertices. A triangle
/// that cuts all four corners of the window needs one slot more; see
/// [`required_output_capacity`].
pub const fn minimum_output_capacity(n: usize) -> usize {
    2 * n
}

/// Output capacity that fits any convex polygon of `n` vertices.
///
/// A convex n-gon cut by a rectangle gains at most one edge per rectangle
/// side, so the result never exceeds `n + 4` vertices. For triangles that is
/// more than `2 * n`.
pub const fn required_output_capacity(n: usize) -> usize {
    let doubled = 2 * n;
    let bounded = n + 4;
    if doubled > bounded {
        doubled
    } else {
        bounded
    }
}

/// Clips convex polygons against an axis-aligned rectangle.
///
/// The clipper holds no buffers and no state beyond the rectangle, so one
/// instance can be shared freely across threads as long as each call gets its
/// own scratch and output slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectClipper {
    rect: ClipRect,
    passes: [AxisClipper; 2],
}

impl RectClipper {
    /// Creates a clipper for `rect`.
    ///
    /// # Errors
    /// [`ClipError::InvalidRect`] if `left > right` or `top > bottom`.
    pub fn new(rect: ClipRect) -> Result<Self, ClipError> {
        if !rect.is_valid() {
            return Err(ClipError::InvalidRect(rect));
        }
        Ok(Self {
            rect,
            passes: [
                AxisClipper::from_rect(Axis::X, &rect),
                AxisClipper::from_rect(Axis::Y, &rect),
            ],
        })
    }

    pub fn rect(&self) -> ClipRect {
        self.rect
    }

    /// Clips `source` and returns the number of vertices written to `output`.
    ///
    /// A count below [`MIN_VISIBLE_VERTICES`] means the polygon is not
    /// visible and `output` holds nothing meaningful. Otherwise
    /// `output[..count]` is the visible polygon, wound the same way as
    /// `source`.
    ///
    /// Neither buffer needs initialising; both are written from the start and
    /// only the written prefix is ever read.
    ///
    /// # Errors
    /// - [`ClipError::EmptyPolygon`] if `source` is empty.
    /// - [`ClipError::BufferTooSmall`] if `scratch` is shorter than
    ///   [`required_scratch_capacity`] or `output` is shorter than
    ///   [`minimum_output_capacity`].
    /// - [`ClipError::Overflow`] if the result does not fit. With `output` of
    ///   at least [`required_output_capacity`] this only happens for
    ///   non-convex `source`.
    pub fn clip_into(
        &self,
        source: &[Vertex],
        scratch: &mut [Vertex],
        output: &mut [Vertex],
    ) -> Result<usize, ClipError> {
        let n = source.len();
        if n == 0 {
            return Err(ClipError::EmptyPolygon);
        }
        check_capacity(BufferKind::Scratch, scratch.len(), required_scratch_capacity(n))?;
        check_capacity(BufferKind::Output, output.len(), minimum_output_capacity(n))?;

        let [first, second] = &self.passes;

        let first_count = first.clip_into(source, scratch, BufferKind::Scratch)?;
        if !is_visible(first_count) {
            log::trace!(
                "{} vertices rejected by {:?} pass ({} left)",
                n,
                first.axis(),
                first_count
            );
            return Ok(first_count);
        }

        let count = second.clip_into(&scratch[..first_count], output, BufferKind::Output)?;
        log::trace!("clipped {} -> {} -> {} vertices", n, first_count, count);
        Ok(count)
    }

    /// Clips `source` into a freshly allocated vector.
    ///
    /// Returns an empty vector when the polygon is not visible.
    pub fn clip_to_vec(&self, source: &[Vertex]) -> Result<Vec<Vertex>, ClipError> {
        let mut scratch = vec![Vertex::ZERO; required_scratch_capacity(source.len())];
        let mut output = vec![Vertex::ZERO; required_output_capacity(source.len())];

        let count = self.clip_into(source, &mut scratch, &mut output)?;
        if !is_visible(count) {
            return Ok(Vec::new());
        }
        output.truncate(count);
        Ok(output)
    }
}

/// Clips `source` against `rect` using caller-owned buffers.
///
/// Shorthand for [`RectClipper::new`] followed by [`RectClipper::clip_into`].
pub fn clip(
    source: &[Vertex],
    rect: &ClipRect,
    scratch: &mut [Vertex],
    output: &mut [Vertex],
) -> Result<usize, ClipError> {
    RectClipper::new(*rect)?.clip_into(source, scratch, output)
}

#[inline]
fn check_capacity(buffer: BufferKind, capacity: usize, required: usize) -> Result<(), ClipError> {
    if capacity < required {
        return Err(ClipError::BufferTooSmall {
            buffer,
            capacity,
            required,
        });
    }
    Ok(())
}
