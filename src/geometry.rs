//! Integer geometry value types shared by the primitive API
//!
//! All shapes are transient: constructed, rasterized into pixel-sink calls,
//! and discarded. Coordinates may be negative or exceed the device frame;
//! clipping policy lives in the pixel sink, not here.

use serde::{Deserialize, Serialize};

/// An integer pixel coordinate. May lie outside the device frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: origin plus extent. Zero or negative extent is
/// a degenerate rectangle that draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when either extent is zero or negative
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}
