//! The drawing capability consumed by the layout engine.

use std::fmt;

use blockimg_core::geometry::{Point, TextBounds};

use crate::color::Rgb;

/// Something blocks can be measured against and drawn onto.
///
/// A surface is owned by exactly one render pass at a time; it is not
/// expected to be shareable between threads. Every method may fail, and a
/// failure aborts the pass that triggered it.
pub trait Surface {
    /// Fill and/or stroke a closed polygon.
    ///
    /// `None` for both colors draws nothing.
    fn draw_polygon(
        &mut self,
        vertices: &[Point],
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    ) -> Result<(), SurfaceError>;

    /// Draw a one pixel line, both endpoints included.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError>;

    /// Bounds `text` would cover if drawn at the origin.
    fn measure_text(&self, text: &str) -> Result<TextBounds, SurfaceError>;

    /// Draw `text` with its anchor (top-left of the measured bounds'
    /// coordinate space) at `position`.
    fn draw_text(&mut self, position: Point, text: &str, color: Rgb) -> Result<(), SurfaceError>;

    /// Stroke the open polyline `v0 -> v1 -> ... -> vn`.
    fn outline(&mut self, color: Rgb, vertices: &[Point]) -> Result<(), SurfaceError> {
        for segment in vertices.windows(2) {
            self.draw_line(segment[0], segment[1], color)?;
        }
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_polygon(
        &mut self,
        vertices: &[Point],
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    ) -> Result<(), SurfaceError> {
        (**self).draw_polygon(vertices, fill, outline)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError> {
        (**self).draw_line(from, to, color)
    }

    fn measure_text(&self, text: &str) -> Result<TextBounds, SurfaceError> {
        (**self).measure_text(text)
    }

    fn draw_text(&mut self, position: Point, text: &str, color: Rgb) -> Result<(), SurfaceError> {
        (**self).draw_text(position, text, color)
    }
}

/// Errors raised by a [`Surface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// A strict surface was asked to touch a pixel it does not have.
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// Text could not be measured or laid out.
    Measure { text: String, reason: String },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "pixel ({x}, {y}) is outside the {width}x{height} surface"
            ),
            Self::Measure { text, reason } => {
                write!(f, "cannot measure text {text:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
