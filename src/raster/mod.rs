//! Immediate-mode rasterization context
//!
//! [`Raster`] borrows a pixel sink and owns the device frame dimensions
//! explicitly — the frame is set once at construction and read-only from
//! then on. Every primitive runs to completion before returning, issuing a
//! sequence of pixel/block writes to the sink; no state persists between
//! calls. Each family lives in its own file:
//!
//! - `line`: general Bresenham line plus fast horizontal/vertical paths
//! - `circle`: midpoint circle outline/fill and the quadrant helpers
//! - `shapes`: rectangles, rounded rectangles, triangles, screen fill

mod circle;
mod line;
mod shapes;

use bitflags::bitflags;

use crate::color::Rgb565;
use crate::sink::PixelSink;

bitflags! {
    /// Which of the four symmetric circle quadrants to draw.
    /// Replaces the raw corner-mask byte of classic GFX libraries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Quadrants: u8 {
        const TOP_LEFT = 0b0001;
        const TOP_RIGHT = 0b0010;
        const BOTTOM_RIGHT = 0b0100;
        const BOTTOM_LEFT = 0b1000;
    }
}

bitflags! {
    /// Which half of a filled circle to sweep with vertical spans
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Sides: u8 {
        const RIGHT = 0b01;
        const LEFT = 0b10;
    }
}

/// Immediate-mode drawing context over a pixel sink
pub struct Raster<'a, S: PixelSink> {
    sink: &'a mut S,
    width: i32,
    height: i32,
}

impl<'a, S: PixelSink> Raster<'a, S> {
    /// Create a context for a device frame of the given dimensions
    pub fn new(sink: &'a mut S, width: i32, height: i32) -> Self {
        Self {
            sink,
            width,
            height,
        }
    }

    /// Device frame width
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Device frame height
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Write a single pixel. Bounds checking is the sink's job.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.sink.set_pixel(x, y, color);
    }

    #[inline]
    pub(crate) fn sink(&mut self) -> &mut S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Framebuffer;

    #[test]
    fn test_frame_dimensions_fixed_at_construction() {
        let mut fb = Framebuffer::with_size(160, 128);
        let raster = Raster::new(&mut fb, 160, 128);
        assert_eq!(raster.width(), 160);
        assert_eq!(raster.height(), 128);
    }

    #[test]
    fn test_quadrant_flags_cover_corner_mask() {
        assert_eq!(Quadrants::all().bits(), 0b1111);
        assert_eq!(Sides::all().bits(), 0b11);
    }
}
