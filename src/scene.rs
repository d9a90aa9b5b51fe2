//! Dashboard scene layer
//!
//! Everything here is a consumer of the raster primitives: the sensor
//! dashboard chrome, reading updates, the gradient background, and the
//! animated value boxes. Glyph drawing is delegated to the external
//! [`TextRenderer`] collaborator — this crate renders no fonts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb565;
use crate::geometry::{Point, Rect};
use crate::raster::Raster;
use crate::sink::PixelSink;

/// Animated value box dimensions
pub const VALUE_BOX_WIDTH: i32 = 140;
pub const VALUE_BOX_HEIGHT: i32 = 50;
const VALUE_BOX_RADIUS: i32 = 10;
const WIPE_STEP: i32 = 10;

/// Glyph set identifier understood by the text-rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontId {
    /// Compact 7x10-class glyphs for labels and readings
    Small,
    /// Large 11x18-class glyphs for headline values
    Large,
}

/// External text-rendering collaborator. Receives origin, string, glyph set,
/// foreground and background colors; how glyphs hit the display is its
/// business entirely.
pub trait TextRenderer {
    fn draw_text(&mut self, origin: Point, text: &str, font: FontId, fg: Rgb565, bg: Rgb565);
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse layout file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Positions and palette for the sensor dashboard, loadable from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub chrome: Rgb565,
    pub accent: Rgb565,
    pub label: Rgb565,
    pub value: Rgb565,
    pub background: Rgb565,
    /// y of the header rule and the top of the content area
    pub header_y: i32,
    /// Inset of the footer rules from the bottom edge
    pub footer_inset: i32,
    pub label_y: i32,
    /// Vertical gap between a label and its value
    pub value_gap: i32,
    pub margin: i32,
    pub corner_marker_radius: i32,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            chrome: Rgb565::CYAN,
            accent: Rgb565::YELLOW,
            label: Rgb565::GREEN,
            value: Rgb565::WHITE,
            background: Rgb565::BLACK,
            header_y: 20,
            footer_inset: 20,
            label_y: 30,
            value_gap: 20,
            margin: 10,
            corner_marker_radius: 8,
        }
    }
}

impl DashboardLayout {
    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let json = fs::read_to_string(path.as_ref())?;
        let layout = serde_json::from_str(&json)?;
        tracing::debug!(path = ?path.as_ref(), "loaded dashboard layout");
        Ok(layout)
    }

    /// Save a layout to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// The temperature/humidity dashboard
pub struct Dashboard {
    layout: DashboardLayout,
}

impl Dashboard {
    pub fn new(layout: DashboardLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Draw the static chrome: frame rules, corner markers, column divider
    /// and the reading labels. Call once after display init.
    pub fn draw_chrome<S: PixelSink>(
        &self,
        raster: &mut Raster<'_, S>,
        text: &mut dyn TextRenderer,
    ) {
        let l = &self.layout;
        let (w, h) = (raster.width(), raster.height());

        raster.fill_screen(l.background);

        raster.draw_fast_hline(0, l.header_y, w, l.chrome);
        raster.draw_fast_hline(0, h - l.footer_inset, w, l.chrome);
        raster.draw_fast_hline(0, h - l.footer_inset - 40, w, l.chrome);
        raster.draw_fast_vline(w / 2, l.header_y, h - l.header_y - 60, l.chrome);

        let r = l.corner_marker_radius;
        let m = l.margin;
        raster.draw_circle(Point::new(m, m), r, l.accent);
        raster.draw_circle(Point::new(w - m, m), r, l.accent);
        raster.draw_circle(Point::new(m, h - m), r, l.accent);
        raster.draw_circle(Point::new(w - m, h - m), r, l.accent);

        let temp_x = l.margin;
        let humid_x = w / 2 + l.margin;
        text.draw_text(
            Point::new(temp_x, l.label_y),
            "Temp:",
            FontId::Small,
            l.label,
            l.background,
        );
        text.draw_text(
            Point::new(humid_x, l.label_y),
            "Humid:",
            FontId::Small,
            l.label,
            l.background,
        );
    }

    /// Overwrite the temperature and humidity readings below their labels
    pub fn update_readings<S: PixelSink>(
        &self,
        raster: &mut Raster<'_, S>,
        text: &mut dyn TextRenderer,
        temp_c: f32,
        humidity: f32,
    ) {
        let l = &self.layout;
        let value_y = l.label_y + l.value_gap;
        let temp_x = l.margin;
        let humid_x = raster.width() / 2 + l.margin;

        // Blank-pad the previous reading before writing the new one
        text.draw_text(
            Point::new(temp_x, value_y),
            "       ",
            FontId::Small,
            l.value,
            l.background,
        );
        text.draw_text(
            Point::new(temp_x, value_y),
            &format!("{temp_c:.2}C"),
            FontId::Small,
            l.value,
            l.background,
        );

        text.draw_text(
            Point::new(humid_x, value_y),
            "       ",
            FontId::Small,
            l.value,
            l.background,
        );
        text.draw_text(
            Point::new(humid_x, value_y),
            &format!("{humidity:.2}%"),
            FontId::Small,
            l.value,
            l.background,
        );
    }
}

/// Fill the frame with a vertical gradient, one horizontal line per row
pub fn draw_gradient_background<S: PixelSink>(
    raster: &mut Raster<'_, S>,
    top: Rgb565,
    bottom: Rgb565,
) {
    let (w, h) = (raster.width(), raster.height());
    if h <= 0 {
        return;
    }
    for i in 0..h {
        let color = top.interpolate(bottom, i as f32 / h as f32);
        raster.draw_fast_hline(0, i, w, color);
    }
}

/// Wipe a rounded value box open left to right, then hand the label/value
/// string to the text collaborator
pub fn draw_animated_value<S: PixelSink>(
    raster: &mut Raster<'_, S>,
    text: &mut dyn TextRenderer,
    origin: Point,
    label: &str,
    value: f32,
    color: Rgb565,
) {
    let mut w = 0;
    while w <= VALUE_BOX_WIDTH {
        raster.fill_round_rect(
            Rect::new(origin.x, origin.y, w, VALUE_BOX_HEIGHT),
            VALUE_BOX_RADIUS,
            color,
        );
        w += WIPE_STEP;
    }

    text.draw_text(
        Point::new(origin.x + 10, origin.y + 10),
        &format!("{label}: {value:.1}"),
        FontId::Large,
        Rgb565::WHITE,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Framebuffer;

    /// Records collaborator calls instead of drawing glyphs
    #[derive(Default)]
    struct RecordingText {
        calls: Vec<(Point, String, FontId)>,
    }

    impl TextRenderer for RecordingText {
        fn draw_text(&mut self, origin: Point, text: &str, font: FontId, _fg: Rgb565, _bg: Rgb565) {
            self.calls.push((origin, text.to_string(), font));
        }
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = DashboardLayout::default();
        let json = serde_json::to_string(&layout).unwrap();
        let back: DashboardLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back.chrome, layout.chrome);
        assert_eq!(back.header_y, layout.header_y);
        assert_eq!(back.corner_marker_radius, layout.corner_marker_radius);
    }

    #[test]
    fn test_layout_load_missing_file_is_io_error() {
        let err = DashboardLayout::load("/nonexistent/layout.json").unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }

    #[test]
    fn test_chrome_draws_labels_through_collaborator() {
        let mut fb = Framebuffer::with_size(160, 128);
        let mut raster = Raster::new(&mut fb, 160, 128);
        let mut text = RecordingText::default();

        let dashboard = Dashboard::new(DashboardLayout::default());
        dashboard.draw_chrome(&mut raster, &mut text);

        let strings: Vec<&str> = text.calls.iter().map(|c| c.1.as_str()).collect();
        assert_eq!(strings, vec!["Temp:", "Humid:"]);
        // Chrome rules landed in the framebuffer
        assert_eq!(fb.get_pixel(0, 20), Some(Rgb565::CYAN));
        assert_eq!(fb.get_pixel(80, 30), Some(Rgb565::CYAN));
    }

    #[test]
    fn test_update_readings_blanks_then_writes() {
        let mut fb = Framebuffer::with_size(160, 128);
        let mut raster = Raster::new(&mut fb, 160, 128);
        let mut text = RecordingText::default();

        let dashboard = Dashboard::new(DashboardLayout::default());
        dashboard.update_readings(&mut raster, &mut text, 21.5, 48.25);

        let strings: Vec<&str> = text.calls.iter().map(|c| c.1.as_str()).collect();
        assert_eq!(strings, vec!["       ", "21.50C", "       ", "48.25%"]);
        // Blank pad and value share an origin
        assert_eq!(text.calls[0].0, text.calls[1].0);
    }

    #[test]
    fn test_gradient_rows_sweep_between_endpoints() {
        let mut fb = Framebuffer::with_size(16, 32);
        let mut raster = Raster::new(&mut fb, 16, 32);
        draw_gradient_background(&mut raster, Rgb565::BLACK, Rgb565::BLUE);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgb565::BLACK));
        // Rows are uniform, blue channel grows monotonically downward
        let mut prev_blue = 0;
        for y in 0..32 {
            let row = fb.get_pixel(0, y).unwrap();
            for x in 1..16 {
                assert_eq!(fb.get_pixel(x, y), Some(row), "row {} not uniform", y);
            }
            let (_, _, b) = row.channels();
            assert!(i32::from(b) >= prev_blue, "blue regressed at row {}", y);
            prev_blue = i32::from(b);
        }
    }

    #[test]
    fn test_animated_value_fills_box_and_emits_text() {
        let mut fb = Framebuffer::with_size(160, 128);
        let mut raster = Raster::new(&mut fb, 160, 128);
        let mut text = RecordingText::default();

        draw_animated_value(
            &mut raster,
            &mut text,
            Point::new(5, 5),
            "Temp",
            21.57,
            Rgb565::RED,
        );

        assert_eq!(text.calls.len(), 1);
        let (origin, string, font) = &text.calls[0];
        assert_eq!(*origin, Point::new(15, 15));
        assert_eq!(string, "Temp: 21.6");
        assert_eq!(*font, FontId::Large);
        // Final wipe covers the full box interior
        assert_eq!(fb.get_pixel(5 + VALUE_BOX_WIDTH / 2, 30), Some(Rgb565::RED));
    }
}
