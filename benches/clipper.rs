use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectclip::bench::ScanlineFill;
use rectclip::clipper::{required_output_capacity, required_scratch_capacity};
use rectclip::demo::fan_scene;
use rectclip::{ClipRect, RectClipper, RenderConfig, TiledRenderer, Vertex};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn clip_rect() -> ClipRect {
    ClipRect::new(100, 700, 100, 500)
}

/// Regular-ish convex polygon with `n` vertices around `(cx, cy)`.
fn polygon(cx: f64, cy: f64, radius: f64, n: usize) -> Vec<Vertex> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            Vertex::new(
                (cx + radius * angle.cos()).round() as i16,
                (cy + radius * angle.sin()).round() as i16,
            )
        })
        .collect()
}

fn benchmark_single_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_clip");
    let clipper = RectClipper::new(clip_rect()).expect("valid rect");

    for n in [3, 8, 32] {
        for (name, shape) in [
            ("contained", polygon(400.0, 300.0, 150.0, n)),
            ("crossing", polygon(120.0, 480.0, 250.0, n)),
            ("rejected", polygon(-300.0, 300.0, 150.0, n)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &shape, |b, shape| {
                let mut scratch = vec![Vertex::ZERO; required_scratch_capacity(shape.len())];
                let mut output = vec![Vertex::ZERO; required_output_capacity(shape.len())];
                b.iter(|| {
                    clipper
                        .clip_into(black_box(shape), &mut scratch, &mut output)
                        .expect("buffers sized for the input")
                });
            });
        }
    }

    group.finish();
}

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanline_fill");
    let mut fill = ScanlineFill::new();

    for (name, shape) in [
        ("small", polygon(400.0, 300.0, 20.0, 6)),
        ("large", polygon(400.0, 300.0, 280.0, 6)),
    ] {
        group.bench_with_input(BenchmarkId::new("hexagon", name), &shape, |b, shape| {
            let mut buffer = vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize];
            b.iter(|| {
                fill.fill_polygon(black_box(shape), BUFFER_WIDTH, BUFFER_HEIGHT, |x, y| {
                    buffer[(y as u32 * BUFFER_WIDTH + x as u32) as usize] = 0xFFFF0000;
                })
            });
        });
    }

    group.finish();
}

fn benchmark_tiled_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiled_render");
    let shapes = fan_scene(BUFFER_WIDTH, BUFFER_HEIGHT, 8);

    for tile in [32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("fan", tile), &tile, |b, &tile| {
            let config = RenderConfig::new(BUFFER_WIDTH, BUFFER_HEIGHT, tile, tile);
            let mut renderer = TiledRenderer::new(config);
            let mut buffer = vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize];
            b.iter(|| {
                renderer.render_with(black_box(&shapes), |x, y, color| {
                    buffer[(y as u32 * BUFFER_WIDTH + x as u32) as usize] = color;
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_clip,
    benchmark_fill,
    benchmark_tiled_render
);
criterion_main!(benches);
