//! Measurements on integer polygons.
//!
//! Polygons are plain vertex slices, implicitly closed from the last vertex
//! back to the first.

use super::rect::ClipRect;
use super::vertex::Vertex;

/// Rotational direction of a polygon's vertex list.
///
/// Named for a y-up coordinate system; on a y-down screen the visual
/// direction is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area: fewer than three vertices, or all collinear.
    Degenerate,
}

/// Twice the signed area of the polygon (shoelace formula).
///
/// Positive for counter-clockwise (y-up) winding.
pub fn signed_area2(vertices: &[Vertex]) -> i64 {
    let n = vertices.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

/// Unsigned area of the polygon.
pub fn area(vertices: &[Vertex]) -> f64 {
    signed_area2(vertices).abs() as f64 * 0.5
}

pub fn winding(vertices: &[Vertex]) -> Winding {
    match signed_area2(vertices) {
        a if a > 0 => Winding::CounterClockwise,
        a if a < 0 => Winding::Clockwise,
        _ => Winding::Degenerate,
    }
}

/// The smallest rectangle containing every vertex, or `None` for an empty slice.
pub fn bounds(vertices: &[Vertex]) -> Option<ClipRect> {
    let first = vertices.first()?;
    let init = ClipRect::new(first.x, first.x, first.y, first.y);
    Some(vertices.iter().skip(1).fold(init, |r, v| ClipRect {
        left: r.left.min(v.x),
        right: r.right.max(v.x),
        top: r.top.min(v.y),
        bottom: r.bottom.max(v.y),
    }))
}

/// Returns true if two neighbouring vertices are equal, including the
/// closing pair (last, first).
pub fn has_consecutive_duplicates(vertices: &[Vertex]) -> bool {
    match vertices.len() {
        0 | 1 => false,
        n => (0..n).any(|i| vertices[i] == vertices[(i + 1) % n]),
    }
}
