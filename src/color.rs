//! RGB565 packed color values and channel interpolation

use serde::{Deserialize, Serialize};

/// A 16-bit packed color: 5 bits red (11-15), 6 bits green (5-10), 5 bits blue (0-4).
/// No alpha channel. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const BLUE: Self = Self(0x001F);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw packed value
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw packed value
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Pack 8-bit channels into 5-6-5, truncating the low bits of each channel
    #[inline]
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Unpack into the raw 5/6/5-bit channel values (not rescaled to 8 bits)
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 11) & 0x1F) as u8,
            ((self.0 >> 5) & 0x3F) as u8,
            (self.0 & 0x1F) as u8,
        )
    }

    /// Expand to 8-bit channels, replicating high bits into the low bits
    /// so full-scale 5/6-bit values map to 255
    #[inline]
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let (r, g, b) = self.channels();
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }

    /// Linearly interpolate each 5/6/5 channel independently, truncating
    /// toward zero, and repack.
    ///
    /// `t` is expected in [0, 1] but is NOT clamped: out-of-range values
    /// extrapolate, and an overflowing channel bleeds into its neighbors in
    /// the repacked result. Gradient callers rely on the extrapolation, so
    /// this stays as documented behavior rather than getting clamped here.
    pub fn interpolate(self, end: Self, t: f32) -> Self {
        let (rs, gs, bs) = self.channels();
        let (re, ge, be) = end.channels();

        let r = i32::from(rs) + ((i32::from(re) - i32::from(rs)) as f32 * t) as i32;
        let g = i32::from(gs) + ((i32::from(ge) - i32::from(gs)) as f32 * t) as i32;
        let b = i32::from(bs) + ((i32::from(be) - i32::from(bs)) as f32 * t) as i32;

        Self(((r << 11) | (g << 5) | b) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(Rgb565::RED.channels(), (0x1F, 0, 0));
        assert_eq!(Rgb565::GREEN.channels(), (0, 0x3F, 0));
        assert_eq!(Rgb565::BLUE.channels(), (0, 0, 0x1F));
        assert_eq!(Rgb565::WHITE.channels(), (0x1F, 0x3F, 0x1F));
    }

    #[test]
    fn test_from_rgb888_truncates() {
        assert_eq!(Rgb565::from_rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb888(0, 0, 0), Rgb565::BLACK);
        // Low bits are dropped, not rounded
        assert_eq!(Rgb565::from_rgb888(7, 3, 7), Rgb565::BLACK);
    }

    #[test]
    fn test_rgb888_round_trip_extremes() {
        assert_eq!(Rgb565::WHITE.to_rgb888(), (255, 255, 255));
        assert_eq!(Rgb565::BLACK.to_rgb888(), (0, 0, 0));
    }

    #[test]
    fn test_interpolate_identity() {
        let c = Rgb565::from_raw(0xA5C3);
        for &t in &[0.0, 0.25, 0.5, 1.0, 2.0, -1.0] {
            assert_eq!(c.interpolate(c, t), c, "identity broken at t={}", t);
        }
    }

    #[test]
    fn test_interpolate_boundaries_exact() {
        let start = Rgb565::from_raw(0x1234);
        let end = Rgb565::from_raw(0xFEDC);
        assert_eq!(start.interpolate(end, 0.0), start);
        assert_eq!(start.interpolate(end, 1.0), end);
    }

    #[test]
    fn test_interpolate_midpoint_truncates() {
        let start = Rgb565::from_rgb888(0, 0, 0);
        let end = Rgb565::WHITE;
        let mid = start.interpolate(end, 0.5);
        // 0x1F * 0.5 = 15.5 -> 15, 0x3F * 0.5 = 31.5 -> 31
        assert_eq!(mid.channels(), (15, 31, 15));
    }

    #[test]
    fn test_interpolate_unclamped_extrapolates() {
        let start = Rgb565::BLACK;
        let end = Rgb565::from_rgb888(0, 0, 128);
        // t > 1 keeps extrapolating instead of saturating
        let over = start.interpolate(end, 2.0);
        assert_ne!(over, end);
    }
}
