#![forbid(unsafe_code)]

//! Raster canvas: an RGB pixel buffer implementing [`Surface`].
//!
//! Lines use Bresenham's algorithm with both endpoints plotted. Polygons are
//! filled with an even-odd scanline pass sampled at integer pixel positions,
//! then stroked edge by edge, so a filled shape always covers its own
//! vertices. Text uses the built-in 5x7 bitmap font unless an
//! [`OutlineFont`] is attached with [`Canvas::with_font`], in which case
//! glyph coverage is alpha-blended over whatever is already drawn.
//!
//! # Example
//!
//! ```
//! use blockimg_render::{Canvas, Rgb, Surface};
//!
//! let mut canvas = Canvas::new(8, 8, Rgb::WHITE);
//! canvas.draw_line((0, 0), (7, 7), Rgb::BLACK).unwrap();
//! assert_eq!(canvas.pixel(3, 3), Some(Rgb::BLACK));
//! assert_eq!(canvas.pixel(3, 4), Some(Rgb::WHITE));
//! ```

use blockimg_core::geometry::{Extent, PixelRect, Point, TextBounds};

use crate::color::Rgb;
use crate::font;
use crate::surface::{Surface, SurfaceError};
use crate::typeface::OutlineFont;

/// What the canvas does with pixels outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipMode {
    /// Silently drop them.
    #[default]
    Clip,
    /// Fail the draw call with [`SurfaceError::OutOfBounds`].
    ///
    /// Useful in tests to prove a layout stays inside the area it reports.
    Strict,
}

/// An owned RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgb,
    clip: ClipMode,
    font: Option<OutlineFont>,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = width as usize * height as usize;
        blockimg_core::debug!(width, height, background = %background, "canvas allocated");
        Self {
            width,
            height,
            background,
            clip: ClipMode::default(),
            font: None,
            pixels: vec![background; len],
        }
    }

    /// Create a canvas covering `extent` (negative dimensions become zero).
    #[must_use]
    pub fn for_extent(extent: Extent, background: Rgb) -> Self {
        Self::new(
            extent.width.max(0) as u32,
            extent.height.max(0) as u32,
            background,
        )
    }

    /// Change how out-of-bounds pixels are handled.
    #[must_use]
    pub fn with_clip_mode(mut self, clip: ClipMode) -> Self {
        self.clip = clip;
        self
    }

    /// Measure and draw text with `font` instead of the bitmap glyphs.
    #[must_use]
    pub fn with_font(mut self, font: OutlineFont) -> Self {
        self.font = Some(font);
        self
    }

    /// The attached outline font, if any.
    #[inline]
    pub fn font(&self) -> Option<&OutlineFont> {
        self.font.as_ref()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color the canvas was created with.
    #[inline]
    pub fn background(&self) -> Rgb {
        self.background
    }

    #[inline]
    pub fn clip_mode(&self) -> ClipMode {
        self.clip
    }

    /// The full canvas as an inclusive rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Row-major pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Copy out the pixels inside `rect`.
    ///
    /// Parts of `rect` hanging off the canvas come back as the background
    /// color, so cropping to an outset bounding box never fails.
    #[must_use]
    pub fn crop(&self, rect: PixelRect) -> Canvas {
        let extent = if rect.is_empty() {
            Extent::ZERO
        } else {
            rect.extent()
        };
        let mut out = Canvas::for_extent(extent, self.background).with_clip_mode(self.clip);
        out.font = self.font.clone();
        for y in 0..extent.height {
            for x in 0..extent.width {
                if let Some(color) = self.pixel(rect.x0 + x, rect.y0 + y)
                    && let Some(idx) = out.index(x, y)
                {
                    out.pixels[idx] = color;
                }
            }
        }
        out
    }

    /// Set one pixel, honoring the clip mode.
    pub fn plot(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), SurfaceError> {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                Ok(())
            }
            None => self.outside(x, y),
        }
    }

    /// Blend `color` into one pixel with `alpha` coverage, honoring the
    /// clip mode. Zero coverage touches nothing, not even the bounds check.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) -> Result<(), SurfaceError> {
        if alpha == 0 {
            return Ok(());
        }
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx] = self.pixels[idx].blend(color, alpha);
                Ok(())
            }
            None => self.outside(x, y),
        }
    }

    fn outside(&self, x: i32, y: i32) -> Result<(), SurfaceError> {
        match self.clip {
            ClipMode::Clip => Ok(()),
            ClipMode::Strict => Err(SurfaceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn line(&mut self, (x0, y0): Point, (x1, y1): Point, color: Rgb) -> Result<(), SurfaceError> {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: i32 = if x0 < x1 { 1 } else { -1 };
        let sy: i32 = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cx = x0;
        let mut cy = y0;

        loop {
            self.plot(cx, cy, color)?;

            if cx == x1 && cy == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                if cx == x1 {
                    break;
                }
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                if cy == y1 {
                    break;
                }
                err += dx;
                cy += sy;
            }
        }
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb) -> Result<(), SurfaceError> {
        let Some(min_y) = vertices.iter().map(|&(_, y)| y).min() else {
            return Ok(());
        };
        let max_y = vertices.iter().map(|&(_, y)| y).max().unwrap_or(min_y);

        let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
        for y in min_y..=max_y {
            crossings.clear();
            for (i, &(ax, ay)) in vertices.iter().enumerate() {
                let (bx, by) = vertices[(i + 1) % vertices.len()];
                if ay == by {
                    continue;
                }
                let (lo_x, lo_y, hi_x, hi_y) = if ay < by {
                    (ax, ay, bx, by)
                } else {
                    (bx, by, ax, ay)
                };
                // Half-open so a shared vertex is counted once.
                if y < lo_y || y >= hi_y {
                    continue;
                }
                let t = f64::from(y - lo_y) / f64::from(hi_y - lo_y);
                crossings.push(f64::from(lo_x) + t * f64::from(hi_x - lo_x));
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = span[0].ceil() as i32;
                let end = span[1].floor() as i32;
                for x in start..=end {
                    self.plot(x, y, color)?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for Canvas {
    fn draw_polygon(
        &mut self,
        vertices: &[Point],
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    ) -> Result<(), SurfaceError> {
        if vertices.is_empty() {
            return Ok(());
        }
        if let Some(color) = fill {
            self.fill_polygon(vertices, color)?;
        }
        // A fill without an outline still covers its boundary pixels.
        let Some(edge) = outline.or(fill) else {
            return Ok(());
        };
        for (i, &from) in vertices.iter().enumerate() {
            let to = vertices[(i + 1) % vertices.len()];
            self.line(from, to, edge)?;
        }
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError> {
        self.line(from, to, color)
    }

    fn measure_text(&self, text: &str) -> Result<TextBounds, SurfaceError> {
        if let Some(face) = &self.font {
            return Ok(face.layout(text).1);
        }
        let width = font::text_width(text.chars().count());
        Ok(TextBounds::new(0, 0, width, font::GLYPH_HEIGHT))
    }

    fn draw_text(&mut self, (x, y): Point, text: &str, color: Rgb) -> Result<(), SurfaceError> {
        if let Some(face) = self.font.clone() {
            let (glyphs, _) = face.layout(text);
            for glyph in glyphs {
                let (width, coverage) = face.rasterize(glyph.ch);
                if width == 0 {
                    continue;
                }
                for (i, &alpha) in coverage.iter().enumerate() {
                    let px = x + glyph.x + (i % width) as i32;
                    let py = y + glyph.y + (i / width) as i32;
                    self.blend(px, py, color, alpha)?;
                }
            }
            return Ok(());
        }
        for (i, ch) in text.chars().enumerate() {
            let left = x + i as i32 * font::ADVANCE;
            for (col, bits) in font::glyph(ch).iter().enumerate() {
                for row in 0..font::GLYPH_HEIGHT {
                    if bits & (1 << row) != 0 {
                        self.plot(left + col as i32, y + row, color)?;
                    }
                }
            }
        }
        Ok(())
    }
}
