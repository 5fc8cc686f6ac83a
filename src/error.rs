//! Errors reported by the clipper.
//!
//! Whether a polygon is visible is not an error: that is carried by the vertex
//! count. These variants cover caller mistakes that would otherwise corrupt a
//! buffer or produce garbage.

use crate::math::rect::ClipRect;

/// Which caller-supplied buffer a capacity error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Intermediate buffer written by the first-axis pass.
    Scratch,
    /// Final buffer written by the second-axis pass.
    Output,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferKind::Scratch => write!(f, "scratch"),
            BufferKind::Output => write!(f, "output"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipError {
    #[error("source polygon has no vertices")]
    EmptyPolygon,
    #[error("clip rectangle bounds are inverted: {0:?}")]
    InvalidRect(ClipRect),
    #[error("{buffer} buffer holds {capacity} vertices but {required} are required")]
    BufferTooSmall {
        buffer: BufferKind,
        capacity: usize,
        required: usize,
    },
    /// A pass produced more vertices than the buffer holds. A triangle can
    /// need seven output slots. With `required_output_capacity` slots only a
    /// non-convex source overflows.
    #[error("{0} buffer overflowed while clipping; it needs max(2N, N + 4) slots for a convex N-gon")]
    Overflow(BufferKind),
}
