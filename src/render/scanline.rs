//! Scanline polygon fill on the integer grid.
//!
//! # Algorithm Overview
//!
//! Each pixel is sampled at its centre `(x + 0.5, y + 0.5)`. For every row the
//! fill collects the points where polygon edges cross the row's centre line,
//! sorts them, and fills the pixels between consecutive pairs (even-odd rule).
//!
//! # Exactness
//!
//! Vertices sit on integer coordinates and sample points on half-integers, so
//! all arithmetic is done at twice the resolution in `i64` and no sample ever
//! lands on a vertex. Crossings are rounded with a half-open rule: a sample
//! exactly on an edge belongs to the polygon on its right. Two polygons that
//! share an edge therefore never both claim a pixel, and never both miss one.
//!
//! This matters for clipped geometry. Pieces produced by the clipper share
//! their boundary vertices bit for bit, and their edges meet with no gap and
//! no overlap. Truncation may leave a piece very slightly non-convex, which
//! the even-odd rule handles without special cases.

use crate::math::polygon;
use crate::math::vertex::Vertex;

/// Scanline polygon filler.
///
/// Holds a reusable crossing list so filling many small polygons does not
/// allocate per row.
#[derive(Default)]
pub struct ScanlineFill {
    crossings: Vec<i64>,
}

impl ScanlineFill {
    /// Creates a new scanline filler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills `polygon`, calling `plot(x, y)` once for every covered pixel in
    /// `[0, width) x [0, height)`. Returns the number of pixels plotted.
    ///
    /// Winding order does not matter. Polygons with fewer than three vertices
    /// cover nothing.
    pub fn fill_polygon<F: FnMut(i32, i32)>(
        &mut self,
        polygon: &[Vertex],
        width: u32,
        height: u32,
        mut plot: F,
    ) -> usize {
        if polygon.len() < 3 {
            return 0;
        }
        let Some(bounds) = polygon::bounds(polygon) else {
            return 0;
        };

        // Row y is sampled at y + 0.5, which lies inside (top, bottom) for
        // top <= y < bottom.
        let y_start = (bounds.top as i32).max(0);
        let y_end = (bounds.bottom as i32).min(height as i32);
        let x_limit = width as i64;
        let n = polygon.len();
        let mut plotted = 0;

        for y in y_start..y_end {
            let sample_y = 2 * y as i64 + 1;

            self.crossings.clear();
            for i in 0..n {
                let (a, b) = (polygon[i], polygon[(i + 1) % n]);
                let (ay, by) = (2 * a.y as i64, 2 * b.y as i64);
                if (ay > sample_y) == (by > sample_y) {
                    continue;
                }
                // Walk every edge top to bottom so shared edges round alike.
                let (top, bottom) = if ay < by { (a, b) } else { (b, a) };
                self.crossings.push(first_pixel_right_of(top, bottom, sample_y));
            }
            self.crossings.sort_unstable();

            for span in self.crossings.chunks_exact(2) {
                let x0 = span[0].max(0);
                let x1 = span[1].min(x_limit);
                for x in x0..x1 {
                    plot(x as i32, y);
                    plotted += 1;
                }
            }
        }

        plotted
    }
}

/// Smallest pixel column whose centre is at or right of where the edge
/// `top -> bottom` crosses the doubled row coordinate `sample_y`.
#[inline]
fn first_pixel_right_of(top: Vertex, bottom: Vertex, sample_y: i64) -> i64 {
    let (tx, ty) = (2 * top.x as i64, 2 * top.y as i64);
    let (bx, by) = (2 * bottom.x as i64, 2 * bottom.y as i64);
    let dy = by - ty;

    // Crossing x (doubled) is num / dy. Centre 2x + 1 >= num / dy
    // <=> x >= (num - dy) / (2 * dy).
    let num = tx * dy + (bx - tx) * (sample_y - ty);
    ceil_div(num - dy, 2 * dy)
}

/// Ceiling division for a positive divisor.
#[inline]
fn ceil_div(n: i64, d: i64) -> i64 {
    -((-n).div_euclid(d))
}
