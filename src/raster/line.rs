//! Line primitives: Bresenham core plus fast axis-aligned paths

use std::mem;

use crate::color::Rgb565;
use crate::geometry::Point;
use crate::sink::PixelSink;

use super::Raster;

impl<S: PixelSink> Raster<'_, S> {
    /// Draw a line between two points, dispatching to the fast
    /// horizontal/vertical path when the endpoints share an axis
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Rgb565) {
        if p0.x == p1.x {
            let (y0, y1) = if p0.y > p1.y {
                (p1.y, p0.y)
            } else {
                (p0.y, p1.y)
            };
            self.draw_fast_vline(p0.x, y0, y1 - y0 + 1, color);
        } else if p0.y == p1.y {
            let (x0, x1) = if p0.x > p1.x {
                (p1.x, p0.x)
            } else {
                (p0.x, p1.x)
            };
            self.draw_fast_hline(x0, p0.y, x1 - x0 + 1, color);
        } else {
            self.write_line(p0, p1, color);
        }
    }

    /// Horizontal line of width `w` starting at (x, y).
    /// Non-positive width draws nothing.
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Rgb565) {
        if w <= 0 {
            return;
        }
        self.write_line(Point::new(x, y), Point::new(x + w - 1, y), color);
    }

    /// Vertical line of height `h` starting at (x, y).
    /// Non-positive height draws nothing.
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Rgb565) {
        if h <= 0 {
            return;
        }
        self.write_line(Point::new(x, y), Point::new(x, y + h - 1), color);
    }

    /// Bresenham line core.
    ///
    /// Draws exactly max(|dx|, |dy|) + 1 pixels forming a connected
    /// 8-connected path; drawing p1 -> p0 yields the same pixel set as
    /// p0 -> p1. Steep lines are transposed for the scan and de-transposed
    /// when each pixel is emitted.
    pub fn write_line(&mut self, p0: Point, p1: Point, color: Rgb565) {
        let (mut x0, mut y0) = (p0.x, p0.y);
        let (mut x1, mut y1) = (p1.x, p1.y);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            mem::swap(&mut x0, &mut y0);
            mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            mem::swap(&mut x0, &mut x1);
            mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };

        while x0 <= x1 {
            if steep {
                self.set_pixel(y0, x0, color);
            } else {
                self.set_pixel(x0, y0, color);
            }
            err -= dy;
            if err < 0 {
                y0 += ystep;
                err += dx;
            }
            x0 += 1;
        }
    }
}
