use std::error::Error;

use rectclip::demo::fan_scene;
use rectclip::{Canvas, RenderConfig, TiledRenderer};

const SCENE_WIDTH: u32 = 512;
const SCENE_HEIGHT: u32 = 384;
const TILE_SIZE: u32 = 48;
const FAN_PER_SIDE: u32 = 6;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tiles.png".to_string());

    let config = RenderConfig::new(SCENE_WIDTH, SCENE_HEIGHT, TILE_SIZE, TILE_SIZE);
    let shapes = fan_scene(config.width(), config.height(), FAN_PER_SIDE);

    let mut canvas = Canvas::new(config.width(), config.height(), config.background());
    let mut renderer = TiledRenderer::new(config);
    let stats = {
        let mut fb = canvas.frame_buffer();
        renderer.render(&shapes, &mut fb)
    };

    canvas.save_png(&path)?;

    println!("wrote {}", path);
    println!(
        "{} shapes, {} tiles ({}x{})",
        shapes.len(),
        stats.tiles,
        config.tile_width(),
        config.tile_height()
    );
    println!(
        "clipped {}, culled {}, visible {}, errors {}",
        stats.clipped, stats.culled, stats.visible, stats.errors
    );
    println!("{} vertices, {} pixels", stats.vertices, stats.pixels);

    Ok(())
}
