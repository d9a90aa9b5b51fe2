//! # pixelsmith
//!
//! An immediate-mode RGB565 rasterization core for small color displays.
//! Primitives draw by issuing single-pixel and block writes to a
//! [`PixelSink`]; the sink owns clipping policy and the hardware, the
//! rasterizer owns the geometry:
//!
//! - [`color`]: packed RGB565 values and channel interpolation
//! - [`geometry`]: integer [`Point`] and [`Rect`] value types
//! - [`sink`]: the [`PixelSink`] contract and an in-memory [`Framebuffer`]
//! - [`raster`]: the [`Raster`] drawing context — lines, circles,
//!   rectangles, rounded rectangles, triangles
//! - [`scene`]: the sensor dashboard and other primitive consumers
//! - [`selftest`]: classic bring-up patterns exercising every primitive
//!
//! Everything is single-threaded and synchronous: a primitive call runs to
//! completion, emits its pixel writes, and returns. No shape state persists
//! across calls. Scope is deliberately narrow — no double buffering, no
//! anti-aliasing, no font rendering (text goes through the
//! [`scene::TextRenderer`] collaborator).

pub mod color;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod selftest;
pub mod sink;

pub use color::Rgb565;
pub use geometry::{Point, Rect};
pub use raster::{Quadrants, Raster, Sides};
pub use scene::{Dashboard, DashboardLayout, FontId, LayoutError, TextRenderer};
pub use sink::{Framebuffer, PixelSink};
