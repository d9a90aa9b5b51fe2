//! Primitive exercise patterns
//!
//! Port of the classic GFX bring-up suite: each routine hammers one
//! primitive family across the whole frame so a misbehaving display or a
//! broken algorithm shows up immediately. These are demo scenes, not unit
//! tests — correctness of the primitives is covered in the raster modules.

use crate::color::Rgb565;
use crate::geometry::{Point, Rect};
use crate::raster::Raster;
use crate::sink::PixelSink;

/// Fan of general lines from each screen corner
pub fn lines<S: PixelSink>(raster: &mut Raster<'_, S>, color: Rgb565) {
    let (w, h) = (raster.width(), raster.height());

    let corners = [
        (0, 0),
        (w - 1, 0),
        (0, h - 1),
        (w - 1, h - 1),
    ];
    for (x1, y1) in corners {
        raster.fill_screen(Rgb565::BLACK);
        let y2 = if y1 == 0 { h - 1 } else { 0 };
        let mut x2 = 0;
        while x2 < w {
            raster.draw_line(Point::new(x1, y1), Point::new(x2, y2), color);
            x2 += 6;
        }
        let x2 = if x1 == 0 { w - 1 } else { 0 };
        let mut y2 = 0;
        while y2 < h {
            raster.draw_line(Point::new(x1, y1), Point::new(x2, y2), color);
            y2 += 6;
        }
    }
}

/// Grid of fast horizontal/vertical lines
pub fn fast_lines<S: PixelSink>(raster: &mut Raster<'_, S>, color1: Rgb565, color2: Rgb565) {
    let (w, h) = (raster.width(), raster.height());

    raster.fill_screen(Rgb565::BLACK);
    let mut y = 0;
    while y < h {
        raster.draw_fast_hline(0, y, w, color1);
        y += 5;
    }
    let mut x = 0;
    while x < w {
        raster.draw_fast_vline(x, 0, h, color2);
        x += 5;
    }
}

/// Concentric rectangle outlines
pub fn rects<S: PixelSink>(raster: &mut Raster<'_, S>, color: Rgb565) {
    let cx = raster.width() / 2;
    let cy = raster.height() / 2;
    let n = raster.width().min(raster.height());

    raster.fill_screen(Rgb565::BLACK);
    let mut i = 2;
    while i < n {
        let i2 = i / 2;
        raster.draw_rect(Rect::new(cx - i2, cy - i2, i, i), color);
        i += 6;
    }
}

/// Nested filled rectangles with contrasting outlines
pub fn filled_rects<S: PixelSink>(raster: &mut Raster<'_, S>, color1: Rgb565, color2: Rgb565) {
    let cx = raster.width() / 2 - 1;
    let cy = raster.height() / 2 - 1;

    raster.fill_screen(Rgb565::BLACK);
    let mut i = raster.width().min(raster.height());
    while i > 0 {
        let i2 = i / 2;
        raster.fill_rect(Rect::new(cx - i2, cy - i2, i, i), color1);
        raster.draw_rect(Rect::new(cx - i2, cy - i2, i, i), color2);
        i -= 6;
    }
}

/// Tiling of filled circles
pub fn filled_circles<S: PixelSink>(raster: &mut Raster<'_, S>, radius: i32, color: Rgb565) {
    let (w, h) = (raster.width(), raster.height());
    let r2 = radius * 2;

    raster.fill_screen(Rgb565::BLACK);
    let mut x = radius;
    while x < w {
        let mut y = radius;
        while y < h {
            raster.fill_circle(Point::new(x, y), radius, color);
            y += r2;
        }
        x += r2;
    }
}

/// Tiling of circle outlines, offset to overlap the filled-circle tiling.
/// Intentionally does not clear the screen.
pub fn circles<S: PixelSink>(raster: &mut Raster<'_, S>, radius: i32, color: Rgb565) {
    let r2 = radius * 2;
    let w = raster.width() + radius;
    let h = raster.height() + radius;

    let mut x = 0;
    while x < w {
        let mut y = 0;
        while y < h {
            raster.draw_circle(Point::new(x, y), radius, color);
            y += r2;
        }
        x += r2;
    }
}

/// Concentric triangle outlines with a deepening blue ramp
pub fn triangles<S: PixelSink>(raster: &mut Raster<'_, S>) {
    let cx = raster.width() / 2 - 1;
    let cy = raster.height() / 2 - 1;
    let n = cx.min(cy);

    raster.fill_screen(Rgb565::BLACK);
    let mut i = 0;
    while i < n {
        raster.draw_triangle(
            Point::new(cx, cy - i),
            Point::new(cx - i, cy + i),
            Point::new(cx + i, cy + i),
            Rgb565::from_rgb888(0, 0, i as u8),
        );
        i += 5;
    }
}

/// Shrinking filled triangles, fill and outline on opposing color ramps
pub fn filled_triangles<S: PixelSink>(raster: &mut Raster<'_, S>) {
    let cx = raster.width() / 2 - 1;
    let cy = raster.height() / 2 - 1;

    raster.fill_screen(Rgb565::BLACK);
    let mut i = cx.min(cy);
    while i > 10 {
        raster.fill_triangle(
            Point::new(cx, cy - i),
            Point::new(cx - i, cy + i),
            Point::new(cx + i, cy + i),
            Rgb565::from_rgb888(0, i as u8, i as u8),
        );
        raster.draw_triangle(
            Point::new(cx, cy - i),
            Point::new(cx - i, cy + i),
            Point::new(cx + i, cy + i),
            Rgb565::from_rgb888(i as u8, i as u8, 0),
        );
        i -= 5;
    }
}

/// Concentric rounded-rectangle outlines on a red ramp
pub fn round_rects<S: PixelSink>(raster: &mut Raster<'_, S>) {
    let cx = raster.width() / 2 - 1;
    let cy = raster.height() / 2 - 1;
    let w = raster.width().min(raster.height());

    raster.fill_screen(Rgb565::BLACK);
    let step = (256 * 6) / w;
    let mut red = 0;
    let mut i = 0;
    while i < w {
        let i2 = i / 2;
        red += step;
        raster.draw_round_rect(
            Rect::new(cx - i2, cy - i2, i, i),
            i / 8,
            Rgb565::from_rgb888(red as u8, 0, 0),
        );
        i += 6;
    }
}

/// Shrinking filled rounded rectangles on a green ramp
pub fn filled_round_rects<S: PixelSink>(raster: &mut Raster<'_, S>) {
    let cx = raster.width() / 2 - 1;
    let cy = raster.height() / 2 - 1;
    let n = raster.width().min(raster.height());

    raster.fill_screen(Rgb565::BLACK);
    let step = (256 * 6) / n;
    let mut green = 256;
    let mut i = n;
    while i > 20 {
        let i2 = i / 2;
        green -= step;
        raster.fill_round_rect(
            Rect::new(cx - i2, cy - i2, i, i),
            i / 8,
            Rgb565::from_rgb888(0, green as u8, 0),
        );
        i -= 6;
    }
}

/// Full-screen flood with each primary in turn
pub fn fill_screen_sweep<S: PixelSink>(raster: &mut Raster<'_, S>) {
    for color in [
        Rgb565::BLACK,
        Rgb565::RED,
        Rgb565::GREEN,
        Rgb565::BLUE,
        Rgb565::BLACK,
    ] {
        raster.fill_screen(color);
    }
}

/// Run the whole suite back to back
pub fn all<S: PixelSink>(raster: &mut Raster<'_, S>) {
    fill_screen_sweep(raster);
    lines(raster, Rgb565::CYAN);
    fast_lines(raster, Rgb565::RED, Rgb565::BLUE);
    rects(raster, Rgb565::GREEN);
    filled_rects(raster, Rgb565::YELLOW, Rgb565::MAGENTA);
    filled_circles(raster, 10, Rgb565::MAGENTA);
    circles(raster, 10, Rgb565::WHITE);
    triangles(raster);
    filled_triangles(raster);
    round_rects(raster);
    filled_round_rects(raster);
}
