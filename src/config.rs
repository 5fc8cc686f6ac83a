//! Tiled rendering parameters.
//!
//! [`RenderConfig`] is the single source of truth for framebuffer and tile
//! dimensions used by [`TiledRenderer`](crate::render::TiledRenderer).

use crate::colors;

/// Framebuffer and tile dimensions.
///
/// Setters return `&mut Self` for chaining:
///
/// ```ignore
/// let mut config = RenderConfig::default();
/// config.set_size(320, 240).set_tile_size(32, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    background: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            tile_width: 64,
            tile_height: 64,
            background: colors::BACKGROUND,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with the given framebuffer and tile sizes.
    ///
    /// Zero tile dimensions are raised to 1. Framebuffer dimensions are
    /// limited to the 16-bit coordinate range.
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        let mut config = Self::default();
        config
            .set_size(width, height)
            .set_tile_size(tile_width, tile_height);
        config
    }

    /// Framebuffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Color the framebuffer is cleared to before each frame.
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Number of tile columns and rows covering the framebuffer.
    pub fn tile_grid(&self) -> (u32, u32) {
        (
            self.width.div_ceil(self.tile_width),
            self.height.div_ceil(self.tile_height),
        )
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        let max = i16::MAX as u32;
        self.width = width.min(max);
        self.height = height.min(max);
        self
    }

    pub fn set_tile_size(&mut self, tile_width: u32, tile_height: u32) -> &mut Self {
        self.tile_width = tile_width.max(1);
        self.tile_height = tile_height.max(1);
        self
    }

    pub fn set_background(&mut self, color: u32) -> &mut Self {
        self.background = color;
        self
    }
}
