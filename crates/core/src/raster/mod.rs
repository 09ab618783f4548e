//! Software raster target backed by a packed-u32 pixel buffer.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{DrawTarget, OriginDimensions, Pixel, Point, RgbColor, Size},
};

use crate::color::Rgb;

/// Owned `width x height` pixel buffer in `0xFFRRGGBB` layout, the format
/// the presentation surface consumes directly. Drawing happens through the
/// `embedded-graphics` primitives; pixels outside the buffer are dropped
/// silently, so callers never have to pre-clip.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK.to_pixel(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw packed pixels, row-major, for presentation.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reads one pixel back as a color. Out-of-bounds reads return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_pixel(self.pixels[(y * self.width + x) as usize]))
    }

    /// Fills the whole buffer with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_pixel());
    }

    /// Expands the buffer to tightly packed RGBA bytes for PNG export.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            let color = Rgb::from_pixel(*pixel);
            bytes.extend_from_slice(&[color.r, color.g, color.b, 0xFF]);
        }
        bytes
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            let offset = (y as u32 * self.width + x as u32) as usize;
            self.pixels[offset] = Rgb::new(color.r(), color.g(), color.b()).to_pixel();
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        primitives::{Circle, Primitive, PrimitiveStyle},
        Drawable,
    };

    #[test]
    fn new_buffer_is_opaque_black() {
        let frame = Framebuffer::new(4, 3);
        assert_eq!(frame.pixels().len(), 12);
        assert!(frame.pixels().iter().all(|p| *p == 0xFF00_0000));
    }

    #[test]
    fn fill_reaches_every_pixel() {
        let mut frame = Framebuffer::new(8, 8);
        frame.fill(Rgb::new(17, 27, 61));
        assert_eq!(frame.pixel(0, 0), Some(Rgb::new(17, 27, 61)));
        assert_eq!(frame.pixel(7, 7), Some(Rgb::new(17, 27, 61)));
    }

    #[test]
    fn out_of_bounds_draws_are_dropped() {
        let mut frame = Framebuffer::new(10, 10);
        let before = frame.clone();
        Circle::with_center(Point::new(-50, -50), 20)
            .into_styled(PrimitiveStyle::with_fill(Rgb::WHITE.to_rgb888()))
            .draw(&mut frame)
            .ok();
        assert_eq!(frame.pixels(), before.pixels());
    }

    #[test]
    fn filled_circle_touches_its_center() {
        let mut frame = Framebuffer::new(20, 20);
        Circle::with_center(Point::new(10, 10), 8)
            .into_styled(PrimitiveStyle::with_fill(Rgb::WHITE.to_rgb888()))
            .draw(&mut frame)
            .ok();
        assert_eq!(frame.pixel(10, 10), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn out_of_bounds_reads_return_none() {
        let frame = Framebuffer::new(4, 4);
        assert_eq!(frame.pixel(4, 0), None);
        assert_eq!(frame.pixel(0, 4), None);
    }

    #[test]
    fn rgba_export_matches_pixel_layout() {
        let mut frame = Framebuffer::new(2, 1);
        frame.fill(Rgb::new(1, 2, 3));
        assert_eq!(frame.to_rgba_bytes(), vec![1, 2, 3, 255, 1, 2, 3, 255]);
    }
}
