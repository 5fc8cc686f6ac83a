//! Demo scenes.
//!
//! Scenes whose shapes share edges, used by the binary and the benchmarks to
//! show that tiled clipping leaves no cracks.

use crate::colors;
use crate::math::vertex::Vertex;
use crate::render::Shape;

const PALETTE: [u32; 6] = [
    colors::RED,
    colors::GREEN,
    colors::BLUE,
    colors::YELLOW,
    colors::CYAN,
    colors::MAGENTA,
];

/// A fan of triangles around an off-centre point, covering the whole
/// `width` x `height` target with a margin on every side.
///
/// Ring points are nudged off a regular spacing so most edges are slanted,
/// and every other triangle is wound the opposite way.
pub fn fan_scene(width: u32, height: u32, per_side: u32) -> Vec<Shape> {
    let per_side = per_side.max(1) as i32;
    let (w, h) = (width.min(i16::MAX as u32 / 2) as i32, height.min(i16::MAX as u32 / 2) as i32);
    let margin = (w.max(h) / 8).max(4);
    let (x0, y0, x1, y1) = (-margin, -margin, w + margin, h + margin);

    let nudge = |i: i32| (i * 7 % 5) - 2;
    let along = |from: i32, to: i32, i: i32| from + (to - from) * i / per_side;

    let mut ring = Vec::with_capacity(4 * per_side as usize);
    for i in 0..per_side {
        ring.push((along(x0, x1, i) + nudge(i), y0));
    }
    for i in 0..per_side {
        ring.push((x1, along(y0, y1, i) + nudge(i)));
    }
    for i in 0..per_side {
        ring.push((along(x1, x0, i) + nudge(i), y1));
    }
    for i in 0..per_side {
        ring.push((x0, along(y1, y0, i) + nudge(i)));
    }

    let center = Vertex::new((w * 3 / 7) as i16, (h * 4 / 9) as i16);
    let ring: Vec<Vertex> = ring
        .into_iter()
        .map(|(x, y)| Vertex::new(x as i16, y as i16))
        .collect();

    (0..ring.len())
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
            let vertices = if i % 2 == 0 {
                vec![center, a, b]
            } else {
                vec![b, a, center]
            };
            Shape::new(vertices, PALETTE[i % PALETTE.len()])
        })
        .collect()
}
