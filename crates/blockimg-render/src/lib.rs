#![forbid(unsafe_code)]

//! Render kernel: colors, the [`Surface`] drawing capability, and two
//! surfaces implementing it.
//!
//! The block layout engine never touches pixels directly. It measures text
//! and emits polygons, lines and text runs through [`Surface`]; whoever owns
//! the surface decides what that means:
//!
//! - [`canvas::Canvas`] rasterizes into an RGB pixel buffer (and, with the
//!   `png` feature, writes PNG files). Text comes from a built-in bitmap
//!   font or, when attached, a [`typeface::OutlineFont`].
//! - [`headless::RecordingSurface`] records the calls for inspection.

pub mod canvas;
pub mod color;
#[cfg(feature = "png")]
pub mod export;
mod font;
pub mod headless;
pub mod surface;
pub mod typeface;

pub use canvas::{Canvas, ClipMode};
pub use color::{ColorParseError, Rgb};
pub use headless::{DrawOp, RecordingSurface};
pub use surface::{Surface, SurfaceError};
pub use typeface::{DEFAULT_FONT_SIZE, FontError, OutlineFont};
