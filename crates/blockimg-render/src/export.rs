#![forbid(unsafe_code)]

//! PNG export through the `image` crate.

use std::fmt;
use std::path::Path;

use image::{ImageFormat, Rgb as ImageRgb, RgbImage};

use crate::canvas::Canvas;

/// Errors from writing a canvas out.
#[derive(Debug)]
pub enum ExportError {
    /// The canvas has no pixels; PNG cannot represent that.
    Empty { width: u32, height: u32 },
    /// The encoder or the filesystem failed.
    Encode(image::ImageError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "cannot export an empty {width}x{height} canvas")
            }
            Self::Encode(err) => write!(f, "PNG export failed: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

impl Canvas {
    /// Copy the canvas into an [`RgbImage`].
    #[must_use]
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let c = self
                .pixel(x as i32, y as i32)
                .unwrap_or_else(|| self.background());
            ImageRgb([c.r, c.g, c.b])
        })
    }

    /// Write the canvas to `path` as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        if self.width() == 0 || self.height() == 0 {
            return Err(ExportError::Empty {
                width: self.width(),
                height: self.height(),
            });
        }
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, ImageFormat::Png)?;
        blockimg_core::info!(
            path = %path.display(),
            width = self.width(),
            height = self.height(),
            "wrote png"
        );
        Ok(())
    }
}
