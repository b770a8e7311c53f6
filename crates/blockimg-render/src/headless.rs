#![forbid(unsafe_code)]

//! A surface that records draw calls instead of rasterizing them.
//!
//! Text measurement uses fixed per-character metrics, so layouts measured
//! here are deterministic and independent of any font. Tests use it to
//! assert on exact vertex lists and to check that everything drawn stays
//! inside a reported bounding box.

use blockimg_core::geometry::{PixelRect, Point, TextBounds};

use crate::color::Rgb;
use crate::surface::{Surface, SurfaceError};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Polygon {
        vertices: Vec<Point>,
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
    },
    Text {
        position: Point,
        text: String,
        color: Rgb,
        /// The measured bounds, already placed at `position`.
        bounds: Option<PixelRect>,
    },
}

impl DrawOp {
    /// Pixels this operation would touch, as an inclusive rectangle.
    #[must_use]
    pub fn bounds(&self) -> Option<PixelRect> {
        match self {
            Self::Polygon {
                vertices,
                fill,
                outline,
            } => {
                if fill.is_none() && outline.is_none() {
                    return None;
                }
                points_bounds(vertices)
            }
            Self::Line { from, to, .. } => points_bounds(&[*from, *to]),
            Self::Text { bounds, .. } => *bounds,
        }
    }
}

fn points_bounds(points: &[Point]) -> Option<PixelRect> {
    let (&first, rest) = points.split_first()?;
    let seed = PixelRect::new(first.0, first.1, first.0, first.1);
    Some(rest.iter().fold(seed, |acc, &p| acc.include(p)))
}

/// Recording [`Surface`] with monospace text metrics.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    char_width: i32,
    line_height: i32,
    fail_on: Option<String>,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Metrics matching the built-in raster font.
    pub const DEFAULT_CHAR_WIDTH: i32 = 6;
    pub const DEFAULT_LINE_HEIGHT: i32 = 7;

    #[must_use]
    pub fn new() -> Self {
        Self::with_metrics(Self::DEFAULT_CHAR_WIDTH, Self::DEFAULT_LINE_HEIGHT)
    }

    /// Measure every character as `char_width` wide and every line as
    /// `line_height` tall.
    #[must_use]
    pub fn with_metrics(char_width: i32, line_height: i32) -> Self {
        Self {
            char_width,
            line_height,
            fail_on: None,
            ops: Vec::new(),
        }
    }

    /// Make `measure_text` fail for exactly `text`.
    #[must_use]
    pub fn fail_measuring(mut self, text: impl Into<String>) -> Self {
        self.fail_on = Some(text.into());
        self
    }

    /// Everything drawn so far, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consume the surface, returning the recorded operations.
    #[must_use]
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Union of the bounds of every recorded operation.
    #[must_use]
    pub fn drawn_bounds(&self) -> Option<PixelRect> {
        self.ops
            .iter()
            .filter_map(DrawOp::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Forget recorded operations; metrics are kept.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_polygon(
        &mut self,
        vertices: &[Point],
        fill: Option<Rgb>,
        outline: Option<Rgb>,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Polygon {
            vertices: vertices.to_vec(),
            fill,
            outline,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Line { from, to, color });
        Ok(())
    }

    fn measure_text(&self, text: &str) -> Result<TextBounds, SurfaceError> {
        if self.fail_on.as_deref() == Some(text) {
            return Err(SurfaceError::Measure {
                text: text.to_string(),
                reason: "measurement disabled for this text".to_string(),
            });
        }
        let chars = text.chars().count() as i32;
        Ok(TextBounds::new(0, 0, chars * self.char_width, self.line_height))
    }

    fn draw_text(&mut self, position: Point, text: &str, color: Rgb) -> Result<(), SurfaceError> {
        let bounds = self.measure_text(text)?.placed_at(position.0, position.1);
        self.ops.push(DrawOp::Text {
            position,
            text: text.to_string(),
            color,
            bounds,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_fixed_metrics() {
        let s = RecordingSurface::with_metrics(7, 10);
        assert_eq!(s.measure_text("ab").unwrap(), TextBounds::new(0, 0, 14, 10));
        assert_eq!(s.measure_text("").unwrap(), TextBounds::new(0, 0, 0, 10));
    }

    #[test]
    fn records_in_order() {
        let mut s = RecordingSurface::new();
        s.draw_line((0, 0), (3, 0), Rgb::BLACK).unwrap();
        s.draw_polygon(&[(0, 0), (2, 0), (2, 2)], Some(Rgb::WHITE), None)
            .unwrap();
        assert_eq!(s.ops().len(), 2);
        assert!(matches!(s.ops()[0], DrawOp::Line { .. }));
        assert!(matches!(s.ops()[1], DrawOp::Polygon { .. }));
    }

    #[test]
    fn drawn_bounds_unions_everything() {
        let mut s = RecordingSurface::new();
        assert_eq!(s.drawn_bounds(), None);
        s.draw_line((1, 1), (4, 2), Rgb::BLACK).unwrap();
        s.draw_text((10, 10), "hi", Rgb::BLACK).unwrap();
        assert_eq!(s.drawn_bounds(), Some(PixelRect::new(1, 1, 21, 16)));
    }

    #[test]
    fn invisible_polygons_do_not_count() {
        let mut s = RecordingSurface::new();
        s.draw_polygon(&[(0, 0), (50, 50)], None, None).unwrap();
        assert_eq!(s.drawn_bounds(), None);
    }

    #[test]
    fn outline_records_each_segment() {
        let mut s = RecordingSurface::new();
        s.outline(Rgb::BLACK, &[(0, 0), (1, 0), (1, 1)]).unwrap();
        assert_eq!(
            s.ops(),
            &[
                DrawOp::Line {
                    from: (0, 0),
                    to: (1, 0),
                    color: Rgb::BLACK
                },
                DrawOp::Line {
                    from: (1, 0),
                    to: (1, 1),
                    color: Rgb::BLACK
                },
            ]
        );
    }

    #[test]
    fn failing_measurement() {
        let mut s = RecordingSurface::new().fail_measuring("boom");
        assert!(s.measure_text("ok").is_ok());
        let err = s.draw_text((0, 0), "boom", Rgb::BLACK).unwrap_err();
        assert!(matches!(err, SurfaceError::Measure { .. }));
        assert!(s.ops().is_empty());
    }

    #[test]
    fn clear_keeps_metrics() {
        let mut s = RecordingSurface::with_metrics(3, 4);
        s.draw_line((0, 0), (1, 1), Rgb::BLACK).unwrap();
        s.clear();
        assert!(s.ops().is_empty());
        assert_eq!(s.measure_text("x").unwrap(), TextBounds::new(0, 0, 3, 4));
    }
}
