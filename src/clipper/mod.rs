//! Convex polygon clipping against axis-aligned rectangles.
//!
//! The clipper works one axis at a time:
//!
//! - [`axis`]: a single pass against a pair of parallel bounds on one axis.
//!   Edge orientation decides which bound is met first, so vertices are
//!   emitted in the order they occur along each edge and shared edges clip
//!   identically no matter which way their polygons wind.
//!
//! - [`two_pass`]: the rectangle clipper, an x pass into a scratch buffer
//!   followed by a y pass into the output buffer.
//!
//! All arithmetic is integer. Crossings use multiply-then-truncating-divide
//! on a widened intermediate, so two polygons clipped against the same
//! rectangle agree exactly on every boundary vertex they share.

pub mod axis;
pub mod two_pass;

pub use axis::{Axis, AxisClipper};
pub use two_pass::{
    clip, is_visible, minimum_output_capacity, required_output_capacity,
    required_scratch_capacity, RectClipper, MIN_VISIBLE_VERTICES,
};
