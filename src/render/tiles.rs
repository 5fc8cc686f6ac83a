//! Tile-based rendering of convex shapes.
//!
//! The framebuffer is cut into a grid of tiles. Every shape is clipped to
//! every tile it overlaps and the visible piece is scan-filled. Neighbouring
//! tiles use the same bound value for their shared side, so a tile rectangle
//! is `[x, x + tile_width]` and pixel centres never lie on a tile boundary.
//!
//! Because clipping is exact on shared edges and the fill rule is half-open,
//! a scene whose shapes tile the plane writes every pixel exactly once,
//! whatever the tile size and whatever the shapes' winding.

use super::framebuffer::FrameBuffer;
use super::scanline::ScanlineFill;
use crate::clipper::{
    is_visible, required_output_capacity, required_scratch_capacity, RectClipper,
};
use crate::config::RenderConfig;
use crate::math::polygon;
use crate::math::rect::ClipRect;
use crate::math::vertex::Vertex;

/// A convex polygon with a fill color.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Vertex>,
    pub color: u32,
}

impl Shape {
    pub fn new(vertices: Vec<Vertex>, color: u32) -> Self {
        Self { vertices, color }
    }
}

/// Counters gathered over one [`TiledRenderer::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub tiles: usize,
    /// Shape/tile pairs skipped because their bounding boxes are disjoint.
    pub culled: usize,
    /// Shape/tile pairs that went through the clipper.
    pub clipped: usize,
    /// Clipped pieces with at least three vertices.
    pub visible: usize,
    /// Vertices across all visible pieces.
    pub vertices: usize,
    /// Shape/tile pairs the clipper rejected with an error.
    pub errors: usize,
    pub pixels: usize,
}

/// Renders shapes tile by tile through the rectangle clipper.
///
/// Owns the scratch and output buffers and grows them to fit the largest
/// shape seen, so steady-state rendering does not allocate.
pub struct TiledRenderer {
    config: RenderConfig,
    fill: ScanlineFill,
    scratch: Vec<Vertex>,
    output: Vec<Vertex>,
}

impl TiledRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            fill: ScanlineFill::new(),
            scratch: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Clip rectangles for every tile, row by row.
    pub fn tile_rects(&self) -> Vec<ClipRect> {
        let (columns, rows) = self.config.tile_grid();
        let (tw, th) = (self.config.tile_width(), self.config.tile_height());

        (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (column, row)))
            .map(|(column, row)| {
                ClipRect::from_origin_size(
                    (column * tw) as i16,
                    (row * th) as i16,
                    tw.min(u16::MAX as u32) as u16,
                    th.min(u16::MAX as u32) as u16,
                )
            })
            .collect()
    }

    /// Clears `buffer` to the configured background and renders `shapes`
    /// into it, later shapes on top.
    pub fn render(&mut self, shapes: &[Shape], buffer: &mut FrameBuffer) -> RenderStats {
        buffer.clear(self.config.background());
        self.render_with(shapes, |x, y, color| buffer.set_pixel(x, y, color))
    }

    /// Renders `shapes`, calling `plot(x, y, color)` for every pixel written.
    pub fn render_with<F: FnMut(i32, i32, u32)>(
        &mut self,
        shapes: &[Shape],
        mut plot: F,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let (width, height) = (self.config.width(), self.config.height());

        let largest = shapes.iter().map(|s| s.vertices.len()).max().unwrap_or(0);
        self.reserve(largest);

        let boxes: Vec<Option<ClipRect>> =
            shapes.iter().map(|s| polygon::bounds(&s.vertices)).collect();

        for tile in self.tile_rects() {
            stats.tiles += 1;
            let clipper = match RectClipper::new(tile) {
                Ok(clipper) => clipper,
                Err(e) => {
                    log::warn!("skipping tile {:?}: {}", tile, e);
                    continue;
                }
            };

            for (index, (shape, bounds)) in shapes.iter().zip(&boxes).enumerate() {
                let Some(bounds) = bounds else {
                    continue;
                };
                if !bounds.intersects(&tile) {
                    stats.culled += 1;
                    continue;
                }

                stats.clipped += 1;
                let count =
                    match clipper.clip_into(&shape.vertices, &mut self.scratch, &mut self.output) {
                        Ok(count) => count,
                        Err(e) => {
                            log::warn!("shape {} not drawn in tile {:?}: {}", index, tile, e);
                            stats.errors += 1;
                            continue;
                        }
                    };
                if !is_visible(count) {
                    continue;
                }

                stats.visible += 1;
                stats.vertices += count;
                let color = shape.color;
                stats.pixels +=
                    self.fill
                        .fill_polygon(&self.output[..count], width, height, |x, y| {
                            plot(x, y, color)
                        });
            }
        }

        log::debug!(
            "rendered {} shapes over {} tiles: {} clipped, {} culled, {} visible, {} pixels",
            shapes.len(),
            stats.tiles,
            stats.clipped,
            stats.culled,
            stats.visible,
            stats.pixels
        );
        stats
    }

    /// Grows the clip buffers to fit a polygon of `vertices` vertices.
    fn reserve(&mut self, vertices: usize) {
        let scratch = required_scratch_capacity(vertices);
        if self.scratch.len() < scratch {
            self.scratch.resize(scratch, Vertex::ZERO);
        }
        let output = required_output_capacity(vertices);
        if self.output.len() < output {
            self.output.resize(output, Vertex::ZERO);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    fn v(x: i16, y: i16) -> Vertex {
        Vertex::new(x, y)
    }

    /// Triangles fanned around an interior point, covering the square
    /// [-10, 74] x [-10, 74] with no gaps. With `alternate`, every other
    /// triangle is wound the opposite way and neighbours walk their shared
    /// edge in the same direction; without it they walk it in opposite
    /// directions.
    fn fan(alternate: bool) -> Vec<Shape> {
        let center = v(33, 27);
        let ring = [
            v(-10, -10),
            v(20, -10),
            v(51, -10),
            v(74, -10),
            v(74, 19),
            v(74, 47),
            v(74, 74),
            v(41, 74),
            v(9, 74),
            v(-10, 74),
            v(-10, 43),
            v(-10, 13),
        ];
        (0..ring.len())
            .map(|i| {
                let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
                let vertices = if !alternate || i % 2 == 0 {
                    vec![center, a, b]
                } else {
                    vec![b, a, center]
                };
                Shape::new(vertices, colors::WHITE)
            })
            .collect()
    }

    fn coverage(config: RenderConfig, shapes: &[Shape]) -> (Vec<u32>, RenderStats) {
        let width = config.width();
        let mut hits = vec![0u32; (width * config.height()) as usize];
        let mut renderer = TiledRenderer::new(config);
        let stats = renderer.render_with(shapes, |x, y, _| {
            hits[(y as u32 * width + x as u32) as usize] += 1;
        });
        (hits, stats)
    }

    #[test]
    fn test_tile_rects_share_bounds() {
        let renderer = TiledRenderer::new(RenderConfig::new(40, 20, 16, 16));
        let tiles = renderer.tile_rects();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], ClipRect::new(0, 16, 0, 16));
        assert_eq!(tiles[1], ClipRect::new(16, 32, 0, 16));
        assert_eq!(tiles[2], ClipRect::new(32, 48, 0, 16));
        assert_eq!(tiles[3], ClipRect::new(0, 16, 16, 32));
    }

    #[test]
    fn test_fan_covers_every_pixel_once() {
        for alternate in [false, true] {
            let shapes = fan(alternate);
            for (tw, th) in [(64, 64), (16, 16), (13, 7), (5, 29), (1, 1)] {
                let (hits, stats) = coverage(RenderConfig::new(64, 64, tw, th), &shapes);
                assert!(
                    hits.iter().all(|&h| h == 1),
                    "tile size {}x{} left gaps or overlaps",
                    tw,
                    th
                );
                assert_eq!(stats.pixels, 64 * 64);
                assert_eq!(stats.errors, 0);
            }
        }
    }

    #[test]
    fn test_pieces_preserve_area() {
        let shapes = fan(false);
        let config = RenderConfig::new(64, 64, 16, 16);
        let renderer = TiledRenderer::new(config);

        let mut total = 0.0;
        for tile in renderer.tile_rects() {
            let clipper = RectClipper::new(tile).unwrap();
            for shape in &shapes {
                let piece = clipper.clip_to_vec(&shape.vertices).unwrap();
                total += polygon::area(&piece);
            }
        }
        assert_relative_eq!(total, 64.0 * 64.0, max_relative = 1e-9);
    }

    #[test]
    fn test_disjoint_shapes_are_culled() {
        let shapes = [Shape::new(
            vec![v(0, 0), v(10, 0), v(10, 10), v(0, 10)],
            colors::RED,
        )];
        let (_, stats) = coverage(RenderConfig::new(64, 64, 16, 16), &shapes);
        assert_eq!(stats.tiles, 16);
        assert_eq!(stats.clipped, 1);
        assert_eq!(stats.culled, 15);
        assert_eq!(stats.visible, 1);
        assert_eq!(stats.pixels, 100);
    }

    #[test]
    fn test_render_into_frame_buffer() {
        let config = RenderConfig::new(8, 8, 4, 4);
        let mut renderer = TiledRenderer::new(config);
        let shapes = [Shape::new(
            vec![v(2, 2), v(6, 2), v(6, 6), v(2, 6)],
            colors::GREEN,
        )];

        let mut pixels = vec![0u32; 64];
        let mut fb = FrameBuffer::new(&mut pixels, 8, 8);
        let stats = renderer.render(&shapes, &mut fb);

        assert_eq!(stats.visible, 4);
        assert_eq!(fb.get_pixel(0, 0), Some(config.background()));
        assert_eq!(fb.get_pixel(2, 2), Some(colors::GREEN));
        assert_eq!(fb.get_pixel(5, 5), Some(colors::GREEN));
        assert_eq!(fb.get_pixel(6, 6), Some(config.background()));
    }

    #[test]
    fn test_empty_shape_is_ignored() {
        let shapes = [Shape::new(Vec::new(), colors::RED)];
        let (hits, stats) = coverage(RenderConfig::new(16, 16, 8, 8), &shapes);
        assert_eq!(stats.clipped, 0);
        assert!(hits.iter().all(|&h| h == 0));
    }
}
