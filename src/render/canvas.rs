//! Owned pixel storage and image export.

use std::path::Path;

use super::framebuffer::FrameBuffer;
use crate::colors;

/// An owned ARGB color buffer.
pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, color: u32) -> Self {
        Self {
            color_buffer: vec![color; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Borrow the pixels as a [`FrameBuffer`] for drawing.
    pub fn frame_buffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Convert to an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let color = self.color_buffer[(y * self.width + x) as usize];
            image::Rgba(colors::to_rgba(color))
        })
    }

    /// Write the canvas to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_image_converts_pixels() {
        let mut canvas = Canvas::new(3, 2, colors::BLUE);
        canvas.frame_buffer().set_pixel(2, 1, 0x80112233);

        let img = canvas.to_image();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0xFF, 0xFF]);
        assert_eq!(img.get_pixel(2, 1).0, [0x11, 0x22, 0x33, 0x80]);
    }

    #[test]
    fn test_save_png() {
        let canvas = Canvas::new(4, 4, colors::RED);
        let path = std::env::temp_dir().join("rectclip_canvas_test.png");
        canvas.save_png(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
