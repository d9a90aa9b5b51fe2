//! Circle primitives: midpoint outline, quadrant helper, span fills
//!
//! All four routines share the same integer recurrence: decision variable
//! `f = 1 - r` with step deltas `ddf_x`/`ddf_y`, stepping x every iteration
//! and y whenever `f >= 0`, additions and comparisons only.

use crate::color::Rgb565;
use crate::geometry::Point;
use crate::sink::PixelSink;

use super::{Quadrants, Raster, Sides};

impl<S: PixelSink> Raster<'_, S> {
    /// Draw a circle outline (1px thick). Negative radius draws nothing.
    pub fn draw_circle(&mut self, center: Point, r: i32, color: Rgb565) {
        if r < 0 {
            return;
        }
        let (x0, y0) = (center.x, center.y);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        // Axis extremes plotted up front so r = 0 is covered without
        // entering the loop
        self.set_pixel(x0, y0 + r, color);
        self.set_pixel(x0, y0 - r, color);
        self.set_pixel(x0 + r, y0, color);
        self.set_pixel(x0 - r, y0, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.set_pixel(x0 + x, y0 + y, color);
            self.set_pixel(x0 - x, y0 + y, color);
            self.set_pixel(x0 + x, y0 - y, color);
            self.set_pixel(x0 - x, y0 - y, color);
            self.set_pixel(x0 + y, y0 + x, color);
            self.set_pixel(x0 - y, y0 + x, color);
            self.set_pixel(x0 + y, y0 - x, color);
            self.set_pixel(x0 - y, y0 - x, color);
        }
    }

    /// Same recurrence as [`draw_circle`](Self::draw_circle) but plots only
    /// the symmetric points of the selected quadrants. Used for
    /// rounded-rectangle corners.
    pub fn draw_circle_quadrants(
        &mut self,
        center: Point,
        r: i32,
        quadrants: Quadrants,
        color: Rgb565,
    ) {
        let (x0, y0) = (center.x, center.y);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            if quadrants.contains(Quadrants::BOTTOM_RIGHT) {
                self.set_pixel(x0 + x, y0 + y, color);
                self.set_pixel(x0 + y, y0 + x, color);
            }
            if quadrants.contains(Quadrants::TOP_RIGHT) {
                self.set_pixel(x0 + x, y0 - y, color);
                self.set_pixel(x0 + y, y0 - x, color);
            }
            if quadrants.contains(Quadrants::BOTTOM_LEFT) {
                self.set_pixel(x0 - y, y0 + x, color);
                self.set_pixel(x0 - x, y0 + y, color);
            }
            if quadrants.contains(Quadrants::TOP_LEFT) {
                self.set_pixel(x0 - y, y0 - x, color);
                self.set_pixel(x0 - x, y0 - y, color);
            }
        }
    }

    /// Fill the left/right half of a circle with vertical spans of length
    /// `2*y + delta + 1` at ±x. A row-pair span is emitted only on a step
    /// that changes y, so no row is drawn twice — overlapping draws matter
    /// on displays with inverted-pixel modes. `delta` stretches each span,
    /// which is how rounded-rectangle fills splice the straight middle in.
    pub fn fill_circle_sides(
        &mut self,
        center: Point,
        r: i32,
        sides: Sides,
        delta: i32,
        color: Rgb565,
    ) {
        let (x0, y0) = (center.x, center.y);
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;
        let mut px = x;
        let mut py = y;

        let delta = delta + 1; // Avoid some +1's in the loop

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            if x < y + 1 {
                if sides.contains(Sides::RIGHT) {
                    self.draw_fast_vline(x0 + x, y0 - y, 2 * y + delta, color);
                }
                if sides.contains(Sides::LEFT) {
                    self.draw_fast_vline(x0 - x, y0 - y, 2 * y + delta, color);
                }
            }
            if y != py {
                if sides.contains(Sides::RIGHT) {
                    self.draw_fast_vline(x0 + py, y0 - px, 2 * px + delta, color);
                }
                if sides.contains(Sides::LEFT) {
                    self.draw_fast_vline(x0 - py, y0 - px, 2 * px + delta, color);
                }
                py = y;
            }
            px = x;
        }
    }

    /// Fill a circle: one central full-diameter vertical span plus both
    /// side sweeps
    pub fn fill_circle(&mut self, center: Point, r: i32, color: Rgb565) {
        self.draw_fast_vline(center.x, center.y - r, 2 * r + 1, color);
        self.fill_circle_sides(center, r, Sides::all(), 0, color);
    }
}
