//! Rectangle, rounded-rectangle and triangle primitives
//!
//! Rectangles compose the fast line/block-fill paths; rounded rectangles
//! splice quarter-circle corners onto shrunk straight edges; triangle fill
//! is a scanline sweep with incremental edge interpolation.

use std::mem;

use crate::color::Rgb565;
use crate::geometry::{Point, Rect};
use crate::sink::PixelSink;

use super::{Quadrants, Raster, Sides};

impl<S: PixelSink> Raster<'_, S> {
    /// Fill the whole device frame
    pub fn fill_screen(&mut self, color: Rgb565) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(Rect::new(0, 0, w, h), color);
    }

    /// Rectangle outline. Degenerate extent draws nothing.
    pub fn draw_rect(&mut self, rect: Rect, color: Rgb565) {
        if rect.is_degenerate() {
            return;
        }
        let Rect { x, y, w, h } = rect;
        self.draw_fast_hline(x, y, w, color);
        self.draw_fast_hline(x, y + h - 1, w, color);
        self.draw_fast_vline(x, y, h, color);
        self.draw_fast_vline(x + w - 1, y, h, color);
    }

    /// Filled rectangle via the sink's block-fill path.
    /// Degenerate extent draws nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb565) {
        if rect.is_degenerate() {
            return;
        }
        self.sink().fill_block(rect.x, rect.y, rect.w, rect.h, color);
    }

    /// Rounded-rectangle outline. The corner radius is clamped to half the
    /// minor axis, so an oversized radius behaves as the largest one that fits.
    pub fn draw_round_rect(&mut self, rect: Rect, r: i32, color: Rgb565) {
        if rect.is_degenerate() {
            return;
        }
        let Rect { x, y, w, h } = rect;
        let r = r.clamp(0, w.min(h) / 2);

        self.draw_fast_hline(x + r, y, w - 2 * r, color); // Top
        self.draw_fast_hline(x + r, y + h - 1, w - 2 * r, color); // Bottom
        self.draw_fast_vline(x, y + r, h - 2 * r, color); // Left
        self.draw_fast_vline(x + w - 1, y + r, h - 2 * r, color); // Right

        let tl = Point::new(x + r, y + r);
        let tr = Point::new(x + w - r - 1, y + r);
        let br = Point::new(x + w - r - 1, y + h - r - 1);
        let bl = Point::new(x + r, y + h - r - 1);
        self.draw_circle_quadrants(tl, r, Quadrants::TOP_LEFT, color);
        self.draw_circle_quadrants(tr, r, Quadrants::TOP_RIGHT, color);
        self.draw_circle_quadrants(br, r, Quadrants::BOTTOM_RIGHT, color);
        self.draw_circle_quadrants(bl, r, Quadrants::BOTTOM_LEFT, color);
    }

    /// Filled rounded rectangle: a central full-height rectangle plus two
    /// corner-bearing edge strips, arranged so no pixel is drawn twice
    pub fn fill_round_rect(&mut self, rect: Rect, r: i32, color: Rgb565) {
        if rect.is_degenerate() {
            return;
        }
        let Rect { x, y, w, h } = rect;
        let r = r.clamp(0, w.min(h) / 2);

        self.fill_rect(Rect::new(x + r, y, w - 2 * r, h), color);
        let delta = h - 2 * r - 1;
        self.fill_circle_sides(Point::new(x + w - r - 1, y + r), r, Sides::RIGHT, delta, color);
        self.fill_circle_sides(Point::new(x + r, y + r), r, Sides::LEFT, delta, color);
    }

    /// Triangle outline: three lines between the vertex pairs
    pub fn draw_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Rgb565) {
        self.draw_line(p0, p1, color);
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p0, color);
    }

    /// Filled triangle via scanline sweep.
    ///
    /// Vertices are sorted ascending by y with three conditional swaps, then
    /// the upper region (edges v0-v1 and v0-v2) and lower region (edges v1-v2
    /// and v0-v2) are scanned row by row with incremental numerator
    /// accumulation, one horizontal span per row. Collinear input collapses
    /// to a single span.
    pub fn fill_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Rgb565) {
        let (mut x0, mut y0) = (p0.x, p0.y);
        let (mut x1, mut y1) = (p1.x, p1.y);
        let (mut x2, mut y2) = (p2.x, p2.y);

        // Sort coordinates by y order (y2 >= y1 >= y0)
        if y0 > y1 {
            mem::swap(&mut y0, &mut y1);
            mem::swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            mem::swap(&mut y2, &mut y1);
            mem::swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            mem::swap(&mut y0, &mut y1);
            mem::swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            // All on one line: single span over the min/max x
            let mut a = x0;
            let mut b = x0;
            if x1 < a {
                a = x1;
            } else if x1 > b {
                b = x1;
            }
            if x2 < a {
                a = x2;
            } else if x2 > b {
                b = x2;
            }
            self.draw_fast_hline(a, y0, b - a + 1, color);
            return;
        }

        let dx01 = x1 - x0;
        let dy01 = y1 - y0;
        let dx02 = x2 - x0;
        let dy02 = y2 - y0;
        let dx12 = x2 - x1;
        let dy12 = y2 - y1;
        let mut sa: i64 = 0;
        let mut sb: i64 = 0;

        // Upper region covers scanline y1 only for flat-bottom triangles
        // (y1 == y2); otherwise y1 belongs to the lower region. This also
        // keeps both dy divisors nonzero in the loops that run.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let mut y = y0;
        while y <= last {
            let mut a = x0 + (sa / i64::from(dy01)) as i32;
            let mut b = x0 + (sb / i64::from(dy02)) as i32;
            sa += i64::from(dx01);
            sb += i64::from(dx02);
            if a > b {
                mem::swap(&mut a, &mut b);
            }
            self.draw_fast_hline(a, y, b - a + 1, color);
            y += 1;
        }

        // Lower region: seed the accumulators for the row where the sweep
        // resumes, then continue incrementally
        sa = i64::from(dx12) * i64::from(y - y1);
        sb = i64::from(dx02) * i64::from(y - y0);
        while y <= y2 {
            let mut a = x1 + (sa / i64::from(dy12)) as i32;
            let mut b = x0 + (sb / i64::from(dy02)) as i32;
            sa += i64::from(dx12);
            sb += i64::from(dx02);
            if a > b {
                mem::swap(&mut a, &mut b);
            }
            self.draw_fast_hline(a, y, b - a + 1, color);
            y += 1;
        }
    }
}
