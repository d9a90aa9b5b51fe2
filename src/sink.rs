//! Pixel sink contract and the in-memory framebuffer back end
//!
//! The rasterizer never touches display hardware. Everything it draws goes
//! through [`PixelSink`]: one pixel at a time, or one axis-aligned block.
//! Sinks own clipping policy — coordinates may be fully or partially outside
//! the device frame and must be clipped or dropped without erroring.

use crate::color::Rgb565;

/// Display back end consumed by the rasterizer.
///
/// Implementations must accept out-of-range coordinates and silently clip;
/// a pixel write either happens or the sink drops it.
pub trait PixelSink {
    /// Write one pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// Fill one axis-aligned block of pixels
    fn fill_block(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565);
}

/// RGB565 framebuffer used by the demo binary and the test suite.
/// This is the reference sink: all clipping happens here.
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer cleared to black
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            width,
            height,
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

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Clear to a solid color
    pub fn clear(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Read a pixel; None when out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Raw packed pixels, row-major
    pub fn as_raw(&self) -> &[Rgb565] {
        &self.pixels
    }
}

impl PixelSink for Framebuffer {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    fn fill_block(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in y0..y1 {
            let start = self.pixel_index(x0 as u32, row as u32);
            let end = start + (x1 - x0) as usize;
            self.pixels[start..end].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::with_size(4, 4);
        fb.set_pixel(-1, 0, Rgb565::RED);
        fb.set_pixel(0, -1, Rgb565::RED);
        fb.set_pixel(4, 0, Rgb565::RED);
        fb.set_pixel(0, 4, Rgb565::RED);
        assert!(fb.as_raw().iter().all(|&c| c == Rgb565::BLACK));
    }

    #[test]
    fn test_fill_block_clips_to_frame() {
        let mut fb = Framebuffer::with_size(4, 4);
        fb.fill_block(-2, -2, 4, 4, Rgb565::GREEN);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x < 2 && y < 2 {
                    Rgb565::GREEN
                } else {
                    Rgb565::BLACK
                };
                assert_eq!(fb.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_fill_block_degenerate_extent() {
        let mut fb = Framebuffer::with_size(4, 4);
        fb.fill_block(0, 0, 0, 4, Rgb565::RED);
        fb.fill_block(0, 0, 4, -3, Rgb565::RED);
        assert!(fb.as_raw().iter().all(|&c| c == Rgb565::BLACK));
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let fb = Framebuffer::with_size(2, 2);
        assert_eq!(fb.get_pixel(2, 0), None);
        assert_eq!(fb.get_pixel(0, -1), None);
    }
}
