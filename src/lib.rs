//! Exact integer clipping of convex polygons against axis-aligned rectangles.
//!
//! Polygons are clipped one axis at a time with integer arithmetic. Vertices
//! are emitted in the order they occur along each edge, and every boundary
//! crossing is interpolated from the same endpoint no matter which way the
//! edge is walked. Two polygons sharing an edge therefore produce identical
//! boundary vertices, with no duplicates, no zero-length edges and no
//! round-off gaps, whatever their winding.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let square = [
//!     Vertex::new(0, 0),
//!     Vertex::new(10, 0),
//!     Vertex::new(10, 10),
//!     Vertex::new(0, 10),
//! ];
//! let rect = ClipRect::new(5, 15, -5, 5);
//!
//! let mut scratch = [Vertex::ZERO; 8];
//! let mut output = [Vertex::ZERO; 8];
//! let count = clip(&square, &rect, &mut scratch, &mut output)?;
//!
//! assert!(is_visible(count));
//! assert_eq!(output[..count], [
//!     Vertex::new(5, 0),
//!     Vertex::new(10, 0),
//!     Vertex::new(10, 5),
//!     Vertex::new(5, 5),
//! ]);
//! # Ok::<(), ClipError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod config;
pub mod demo;
pub mod error;
pub mod math;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{clip, is_visible, AxisClipper, RectClipper};
pub use config::RenderConfig;
pub use error::{BufferKind, ClipError};
pub use math::rect::ClipRect;
pub use math::vertex::Vertex;
pub use render::{Canvas, FrameBuffer, RenderStats, Shape, TiledRenderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip, is_visible, minimum_output_capacity, required_output_capacity,
        required_scratch_capacity, Axis, AxisClipper, RectClipper, MIN_VISIBLE_VERTICES,
    };
    pub use crate::error::{BufferKind, ClipError};

    // Geometry
    pub use crate::math::polygon::{self, Winding};
    pub use crate::math::rect::ClipRect;
    pub use crate::math::vertex::Vertex;

    // Rendering
    pub use crate::config::RenderConfig;
    pub use crate::render::{Canvas, FrameBuffer, RenderStats, Shape, TiledRenderer};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::ScanlineFill;
}
