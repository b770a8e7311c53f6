#![forbid(unsafe_code)]

//! Outline fonts (TrueType/OpenType) rasterized with `fontdue`.
//!
//! A [`Canvas`](crate::Canvas) without a font falls back to the built-in
//! bitmap glyphs. With one, text is laid out on a single line from the
//! font's own advances and kerning, and each glyph's coverage is blended
//! into the pixels underneath.
//!
//! Layout is normalized so the measured bounds always start at `(0, 0)`:
//! glyphs with a negative left bearing or ink above the ascender shift the
//! whole run right/down instead of escaping the box the layout engine
//! reserved for them.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use blockimg_core::geometry::TextBounds;
use fontdue::{Font, FontSettings};

/// Pixel size used when none is given.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Error loading an outline font.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io(std::io::Error),
    /// The bytes are not a font `fontdue` understands.
    Parse(&'static str),
    /// Pixel sizes must be finite and positive.
    Size(f32),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read font: {err}"),
            Self::Parse(reason) => write!(f, "invalid font: {reason}"),
            Self::Size(px) => write!(f, "invalid font size {px}: must be positive"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) | Self::Size(_) => None,
        }
    }
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// A parsed outline font at a fixed pixel size.
///
/// Cloning is cheap; clones share the parsed font.
#[derive(Clone)]
pub struct OutlineFont {
    font: Arc<Font>,
    px: f32,
}

/// One glyph of a laid-out run, relative to the run's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlacedGlyph {
    pub ch: char,
    pub x: i32,
    pub y: i32,
}

impl OutlineFont {
    /// Parse font file contents.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, FontError> {
        if !(px.is_finite() && px > 0.0) {
            return Err(FontError::Size(px));
        }
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(FontError::Parse)?;
        blockimg_core::debug!(name = font.name().unwrap_or("unnamed"), px, "font loaded");
        Ok(Self {
            font: Arc::new(font),
            px,
        })
    }

    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>, px: f32) -> Result<Self, FontError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes, px)
    }

    /// Pixel size glyphs are rasterized at.
    #[inline]
    pub fn size(&self) -> f32 {
        self.px
    }

    /// The font's family name, when the file carries one.
    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }

    /// `(ascent, line height)` in whole pixels.
    fn line(&self) -> (i32, i32) {
        match self.font.horizontal_line_metrics(self.px) {
            Some(lm) => {
                let ascent = lm.ascent.ceil() as i32;
                (ascent, ascent + (-lm.descent).ceil().max(0.0) as i32)
            }
            None => (self.px.ceil() as i32, self.px.ceil() as i32),
        }
    }

    /// Place every glyph of `text` and return the run's bounds.
    ///
    /// Bounds cover the full line height and the pen advance as well as
    /// every inked pixel, and always start at `(0, 0)`.
    pub(crate) fn layout(&self, text: &str) -> (Vec<PlacedGlyph>, TextBounds) {
        let (ascent, line_height) = self.line();
        let mut placed = Vec::with_capacity(text.len());
        let mut pen = 0.0_f32;
        let (mut left, mut top, mut right, mut bottom) = (0, 0, 0, line_height);
        let mut previous: Option<char> = None;

        for ch in text.chars() {
            if let Some(prev) = previous {
                pen += self.font.horizontal_kern(prev, ch, self.px).unwrap_or(0.0);
            }
            let metrics = self.font.metrics(ch, self.px);
            let x = pen.round() as i32 + metrics.xmin;
            let y = ascent - metrics.ymin - metrics.height as i32;
            if metrics.width > 0 && metrics.height > 0 {
                left = left.min(x);
                top = top.min(y);
                right = right.max(x + metrics.width as i32);
                bottom = bottom.max(y + metrics.height as i32);
            }
            placed.push(PlacedGlyph { ch, x, y });
            pen += metrics.advance_width;
            previous = Some(ch);
        }
        if !placed.is_empty() {
            right = right.max(pen.ceil() as i32);
        }

        for glyph in &mut placed {
            glyph.x -= left;
            glyph.y -= top;
        }
        (placed, TextBounds::new(0, 0, right - left, bottom - top))
    }

    /// Coverage bitmap for `ch`: `(width, alpha values)` row-major.
    pub(crate) fn rasterize(&self, ch: char) -> (usize, Vec<u8>) {
        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        (metrics.width, coverage)
    }
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("name", &self.font.name())
            .field("px", &self.px)
            .finish()
    }
}

/// Two handles are equal when they share the parsed font and size.
impl PartialEq for OutlineFont {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.font, &other.font) && self.px.to_bits() == other.px.to_bits()
    }
}

impl Eq for OutlineFont {}
