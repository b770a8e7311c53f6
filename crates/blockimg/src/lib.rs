#![forbid(unsafe_code)]

//! Render block-based programming scripts to images.
//!
//! This crate is the stable surface: it re-exports the geometry, render,
//! style and layout crates and adds a crate-wide [`Error`] plus a
//! [`prelude`].
//!
//! ```
//! use blockimg::prelude::*;
//!
//! let theme = Theme::default();
//! let script = Stack::new(vec![
//!     Block::new(theme.require("motion")?, vec!["move".into(), Literal::new("10").into(), "steps".into()])
//!         .into(),
//! ]);
//! let canvas = render_to_canvas(&script, &LayoutConfig::default(), 10, Rgb::WHITE)?;
//! assert!(canvas.width() > 20);
//! # Ok::<(), blockimg::Error>(())
//! ```

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use blockimg_core::geometry::{Extent, PixelRect, Point, TextBounds};

// --- Render re-exports -----------------------------------------------------

pub use blockimg_render::{
    Canvas, ClipMode, ColorParseError, DEFAULT_FONT_SIZE, DrawOp, FontError, OutlineFont,
    RecordingSurface, Rgb, Surface, SurfaceError,
};

#[cfg(feature = "png")]
pub use blockimg_render::export::ExportError;

// --- Style re-exports ------------------------------------------------------

pub use blockimg_style::{
    BlockStyle, LayoutConfig, LayoutConfigError, LayoutConfigParse, Theme, ThemeParseError,
    UnknownCategory,
};

// --- Layout re-exports -----------------------------------------------------

pub use blockimg_blocks::{
    Block, Boolean, BoxItem, CBlock, Context, Layout, Literal, Menu, Reporter, Row, Stack,
    StackItem, render_to_canvas, render_with_font,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for blockimg programs.
#[derive(Debug)]
pub enum Error {
    /// Measuring or drawing failed.
    Surface(SurfaceError),
    /// A theme table could not be parsed.
    Theme(ThemeParseError),
    /// A script referenced a category the theme does not define.
    UnknownCategory(UnknownCategory),
    /// A font could not be loaded.
    Font(FontError),
    /// Writing the image failed.
    #[cfg(feature = "png")]
    Export(ExportError),
    /// Reading an input file failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
            Self::UnknownCategory(err) => write!(f, "{err}"),
            Self::Font(err) => write!(f, "{err}"),
            #[cfg(feature = "png")]
            Self::Export(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Theme(err) => Some(err),
            Self::UnknownCategory(err) => Some(err),
            Self::Font(err) => Some(err),
            #[cfg(feature = "png")]
            Self::Export(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<ThemeParseError> for Error {
    fn from(err: ThemeParseError) -> Self {
        Self::Theme(err)
    }
}

impl From<UnknownCategory> for Error {
    fn from(err: UnknownCategory) -> Self {
        Self::UnknownCategory(err)
    }
}

impl From<FontError> for Error {
    fn from(err: FontError) -> Self {
        Self::Font(err)
    }
}

#[cfg(feature = "png")]
impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for blockimg APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Block, BlockStyle, Boolean, BoxItem, CBlock, Canvas, Error, Extent, Layout, LayoutConfig,
        Literal, Menu, OutlineFont, Reporter, Result, Rgb, Stack, StackItem, Theme,
        render_to_canvas, render_with_font,
    };

    pub use crate::{blocks, core, render, style};
}

pub use blockimg_blocks as blocks;
pub use blockimg_core as core;
pub use blockimg_render as render;
pub use blockimg_style as style;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unknown_category_converts_and_displays() {
        let err: Error = Theme::empty().require("motion").unwrap_err().into();
        assert!(matches!(err, Error::UnknownCategory(_)));
        assert!(err.to_string().contains("motion"));
        assert!(err.source().is_some());
    }

    #[test]
    fn theme_errors_convert() {
        let err: Error = Theme::parse("motion #zzzzzz").unwrap_err().into();
        assert!(matches!(err, Error::Theme(_)));
    }

    #[test]
    fn font_errors_convert() {
        let err: Error = OutlineFont::from_bytes(b"\0\0\0\0", DEFAULT_FONT_SIZE)
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Font(FontError::Parse(_))));
        assert!(err.to_string().starts_with("invalid font"));
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn prelude_renders_a_script() {
        use crate::prelude::*;

        let theme = Theme::default();
        let script: Stack = Block::new(
            theme.require("looks").unwrap(),
            vec!["say".into(), Literal::new("Hello!").into()],
        )
        .into();
        let canvas = render_to_canvas(&script, &LayoutConfig::default(), 0, Rgb::WHITE).unwrap();
        assert!(canvas.width() > 0 && canvas.height() > 0);
    }
}
