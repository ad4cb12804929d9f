//! Pixel output.

use std::path::Path;

use tinyray_core::Color;

use crate::RenderResult;

/// Receives traced pixels in raster order.
pub trait PixelSink {
    /// Store the final colour of pixel `(row, col)`.
    fn put_pixel(&mut self, row: u32, col: u32, color: Color);

    /// Called after the last pixel of `row`.
    fn finish_row(&mut self, _row: u32) {}
}

impl<F> PixelSink for F
where
    F: FnMut(u32, u32, Color),
{
    fn put_pixel(&mut self, row: u32, col: u32, color: Color) {
        self(row, col, color)
    }
}

/// Convert a color to 8-bit RGBA. Channels are clamped, no gamma.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the bottom of the image.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[self.index(row, col)]
    }

    pub fn set(&mut self, row: u32, col: u32, color: Color) {
        let index = self.index(row, col);
        self.pixels[index] = color;
    }

    /// 8-bit RGBA image, top row first.
    pub fn to_rgba8(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(self.height - 1 - y, x)))
        })
    }

    /// Write the buffer as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgba8()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn put_pixel(&mut self, row: u32, col: u32, color: Color) {
        self.set(row, col, color);
    }
}
