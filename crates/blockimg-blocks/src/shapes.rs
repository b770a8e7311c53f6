#![forbid(unsafe_code)]

//! Polygon outlines for the three shape families.
//!
//! Every outline runs clockwise from the top-left corner's inflection point
//! `(x0 + roundness, y0)`. Corners are cut with a straight diagonal of
//! `roundness` pixels. Tabs always protrude downwards: the top edge of a
//! block dips into a tab shape, the bottom edge bulges out into the notch
//! that the next block's tab fits into.
//!
//! Alongside each silhouette there are open polylines one pixel inside the
//! edge: a highlight along the top and a shadow along the bottom.

use bitflags::bitflags;
use blockimg_core::geometry::{PixelRect, Point};
use blockimg_render::{Rgb, Surface, SurfaceError};
use blockimg_style::{BlockStyle, LayoutConfig};

bitflags! {
    /// Optional connector pieces of a block or C outline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Connectors: u8 {
        /// The shape continues into a following block: its bottom edge
        /// carries a notch.
        const BOTTOM_NOTCH = 0b0000_0001;
        /// A C block's bottom bar carries a tab for the notch of the last
        /// block inside its mouth.
        const INNER_TAB = 0b0000_0010;
    }
}

impl Connectors {
    /// Connectors of a block (or C) that is or is not last in its stack.
    #[must_use]
    pub fn for_block(is_last: bool) -> Self {
        if is_last {
            Self::empty()
        } else {
            Self::BOTTOM_NOTCH
        }
    }
}

/// Colors for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub fill: Option<Rgb>,
    pub outline: Option<Rgb>,
    pub highlight: Option<Rgb>,
    pub shadow: Option<Rgb>,
}

impl Paint {
    /// Fill, outline, highlight and shadow from a category palette.
    #[must_use]
    pub fn from_style(style: &BlockStyle) -> Self {
        Self {
            fill: style.background,
            outline: style.outline,
            highlight: style.highlight,
            shadow: style.shadow,
        }
    }

    /// Fill and outline only.
    #[must_use]
    pub fn flat(fill: Option<Rgb>, outline: Option<Rgb>) -> Self {
        Self {
            fill,
            outline,
            highlight: None,
            shadow: None,
        }
    }
}

/// The four corners of a tab whose left slope starts at `(start, y)`.
///
/// Listed left to right; reverse them when walking an edge leftwards.
fn tab(config: &LayoutConfig, start: i32, y: i32) -> [Point; 4] {
    let t = config.tab_height;
    let a = start + config.tab_padding;
    let b = a + t;
    let c = b + config.tab_width;
    let d = c + t;
    [(a, y), (b, y + t), (c, y + t), (d, y)]
}

fn push_tab_reversed(verts: &mut Vec<Point>, tab: [Point; 4]) {
    verts.extend(tab.into_iter().rev());
}

// ── Rounded rectangle ──────────────────────────────────────────────────

/// Silhouette of a rectangle with cut corners.
#[must_use]
pub fn rounded_rect(rect: PixelRect, roundness: i32) -> [Point; 8] {
    let PixelRect { x0, y0, x1, y1 } = rect;
    let r = roundness;
    [
        (x0 + r, y0),
        (x1 - r, y0),
        (x1, y0 + r),
        (x1, y1 - r),
        (x1 - r, y1),
        (x0 + r, y1),
        (x0, y1 - r),
        (x0, y0 + r),
    ]
}

#[must_use]
pub fn rounded_rect_highlight(rect: PixelRect, roundness: i32) -> [Point; 4] {
    let PixelRect { x0, y0, x1, .. } = rect;
    let r = roundness;
    [(x0 + 1, y0 + r), (x0 + r, y0 + 1), (x1 - r, y0 + 1), (x1 - 1, y0 + r)]
}

#[must_use]
pub fn rounded_rect_shadow(rect: PixelRect, roundness: i32) -> [Point; 4] {
    let PixelRect { x0, x1, y1, .. } = rect;
    let r = roundness;
    [(x0 + 1, y1 - r), (x0 + r, y1 - 1), (x1 - r, y1 - 1), (x1 - 1, y1 - r)]
}

/// Draw a rounded rectangle covering exactly `rect`.
pub fn draw_rounded_rect(
    surface: &mut dyn Surface,
    rect: PixelRect,
    roundness: i32,
    paint: Paint,
) -> Result<(), SurfaceError> {
    surface.draw_polygon(&rounded_rect(rect, roundness), paint.fill, paint.outline)?;
    if let Some(color) = paint.highlight {
        surface.outline(color, &rounded_rect_highlight(rect, roundness))?;
    }
    if let Some(color) = paint.shadow {
        surface.outline(color, &rounded_rect_shadow(rect, roundness))?;
    }
    Ok(())
}

// ── Block ──────────────────────────────────────────────────────────────

/// Silhouette of a command block whose body is `rect`.
///
/// With [`Connectors::BOTTOM_NOTCH`] the outline dips `tab_height` pixels
/// below `rect.y1`.
#[must_use]
pub fn block_outline(rect: PixelRect, config: &LayoutConfig, connectors: Connectors) -> Vec<Point> {
    let PixelRect { x0, y0, x1, y1 } = rect;
    let r = config.block_roundness;
    let mut verts = Vec::with_capacity(16);
    verts.push((x0 + r, y0));
    verts.extend(tab(config, x0 + r, y0));
    verts.extend([(x1 - r, y0), (x1, y0 + r), (x1, y1 - r), (x1 - r, y1)]);
    if connectors.contains(Connectors::BOTTOM_NOTCH) {
        push_tab_reversed(&mut verts, tab(config, x0 + r, y1));
    }
    verts.extend([(x0 + r, y1), (x0, y1 - r), (x0, y0 + r)]);
    verts
}

#[must_use]
pub fn block_highlight(rect: PixelRect, config: &LayoutConfig) -> Vec<Point> {
    top_stroke(rect, config.block_roundness, config)
}

/// Highlight under a top edge that carries a tab.
fn top_stroke(rect: PixelRect, r: i32, config: &LayoutConfig) -> Vec<Point> {
    let PixelRect { x0, y0, x1, .. } = rect;
    let mut verts = vec![(x0 + 1, y0 + r), (x0 + r, y0 + 1)];
    verts.extend(tab(config, x0 + r, y0 + 1));
    verts.extend([(x1 - r, y0 + 1), (x1 - 1, y0 + r)]);
    verts
}

/// The bottom inner stroke, following the notch only when there is one.
#[must_use]
pub fn block_shadow(rect: PixelRect, config: &LayoutConfig, connectors: Connectors) -> Vec<Point> {
    let PixelRect { x0, x1, y1, .. } = rect;
    let r = config.block_roundness;
    let mut verts = vec![(x0 + 1, y1 - r), (x0 + r, y1 - 1)];
    if connectors.contains(Connectors::BOTTOM_NOTCH) {
        verts.extend(tab(config, x0 + r, y1 - 1));
    }
    verts.extend([(x1 - r, y1 - 1), (x1 - 1, y1 - r)]);
    verts
}

/// Draw a command block whose body is `rect`.
pub fn draw_block(
    surface: &mut dyn Surface,
    rect: PixelRect,
    config: &LayoutConfig,
    style: &BlockStyle,
    connectors: Connectors,
) -> Result<(), SurfaceError> {
    surface.draw_polygon(
        &block_outline(rect, config, connectors),
        style.background,
        style.outline,
    )?;
    if let Some(color) = style.highlight {
        surface.outline(color, &block_highlight(rect, config))?;
    }
    if let Some(color) = style.shadow {
        surface.outline(color, &block_shadow(rect, config, connectors))?;
    }
    Ok(())
}

// ── C block ────────────────────────────────────────────────────────────

/// Placement of a C block outline.
///
/// `header` is the top bar, inclusive. The mouth spans `mouth_height` rows
/// below `header.y1`, and the bottom bar is `c_width` rows below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CShape {
    pub header: PixelRect,
    pub mouth_height: i32,
}

impl CShape {
    /// Top row of the bottom bar.
    #[inline]
    fn bar_top(&self) -> i32 {
        self.header.y1 + self.mouth_height
    }

    /// Bottom row of the bottom bar (before any notch).
    #[inline]
    fn bar_bottom(&self, config: &LayoutConfig) -> i32 {
        self.bar_top() + config.c_width
    }
}

/// Silhouette of a C block.
#[must_use]
pub fn c_outline(shape: CShape, config: &LayoutConfig, connectors: Connectors) -> Vec<Point> {
    let PixelRect { x0, y0, x1, y1 } = shape.header;
    let w = config.c_width;
    let r = config.c_roundness;
    let top = shape.bar_top();
    let bottom = shape.bar_bottom(config);
    let inner = x0 + w;

    let mut verts = Vec::with_capacity(32);
    verts.push((x0 + r, y0));
    verts.extend(tab(config, x0 + r, y0));
    verts.extend([(x1 - r, y0), (x1, y0 + r), (x1, y1 - r), (x1 - r, y1)]);
    // Header notch: the first block in the mouth hooks onto it.
    push_tab_reversed(&mut verts, tab(config, inner + r, y1));
    verts.extend([(inner + r, y1), (inner, y1 + r), (inner, top - r), (inner + r, top)]);
    if connectors.contains(Connectors::INNER_TAB) {
        verts.extend(tab(config, inner + r, top));
    }
    verts.extend([(x1 - r, top), (x1, top + r), (x1, bottom - r), (x1 - r, bottom)]);
    if connectors.contains(Connectors::BOTTOM_NOTCH) {
        push_tab_reversed(&mut verts, tab(config, x0 + r, bottom));
    }
    verts.extend([(x0 + r, bottom), (x0, bottom - r), (x0, y0 + r)]);
    verts
}

/// Highlights: along the header's top, then along the bottom bar's top.
#[must_use]
pub fn c_highlights(shape: CShape, config: &LayoutConfig, connectors: Connectors) -> [Vec<Point>; 2] {
    let PixelRect { x0, x1, .. } = shape.header;
    let w = config.c_width;
    let r = config.c_roundness;
    let top = shape.bar_top();
    let inner = x0 + w;

    let header = top_stroke(shape.header, r, config);

    let mut bar = vec![(inner, top - r + 1), (inner + r, top + 1)];
    if connectors.contains(Connectors::INNER_TAB) {
        bar.extend(tab(config, inner + r, top + 1));
    }
    bar.extend([(x1 - r, top + 1), (x1 - 1, top + r)]);

    [header, bar]
}

/// Shadows: along the bottom bar's bottom, then along the header's bottom.
#[must_use]
pub fn c_shadows(shape: CShape, config: &LayoutConfig, connectors: Connectors) -> [Vec<Point>; 2] {
    let PixelRect { x0, x1, y1, .. } = shape.header;
    let w = config.c_width;
    let r = config.c_roundness;
    let bottom = shape.bar_bottom(config);
    let inner = x0 + w;

    let mut bar = vec![(x0 + 1, bottom - r), (x0 + r, bottom - 1)];
    if connectors.contains(Connectors::BOTTOM_NOTCH) {
        bar.extend(tab(config, x0 + r, bottom - 1));
    }
    bar.extend([(x1 - r, bottom - 1), (x1 - 1, bottom - r)]);

    let mut header = vec![(inner, y1 + r - 1), (inner + r, y1 - 1)];
    header.extend(tab(config, inner + r, y1 - 1));
    header.extend([(x1 - r, y1 - 1), (x1 - 1, y1 - r)]);

    [bar, header]
}

/// Draw a C block.
pub fn draw_c(
    surface: &mut dyn Surface,
    shape: CShape,
    config: &LayoutConfig,
    style: &BlockStyle,
    connectors: Connectors,
) -> Result<(), SurfaceError> {
    surface.draw_polygon(
        &c_outline(shape, config, connectors),
        style.background,
        style.outline,
    )?;
    if let Some(color) = style.highlight {
        for line in c_highlights(shape, config, connectors) {
            surface.outline(color, &line)?;
        }
    }
    if let Some(color) = style.shadow {
        for line in c_shadows(shape, config, connectors) {
            surface.outline(color, &line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockimg_render::{DrawOp, RecordingSurface};

    fn cfg() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn rounded_rect_vertices() {
        let rect = PixelRect::new(0, 0, 9, 5);
        assert_eq!(
            rounded_rect(rect, 2),
            [(2, 0), (7, 0), (9, 2), (9, 3), (7, 5), (2, 5), (0, 3), (0, 2)]
        );
        assert_eq!(
            rounded_rect_highlight(rect, 2),
            [(1, 2), (2, 1), (7, 1), (8, 2)]
        );
        assert_eq!(rounded_rect_shadow(rect, 2), [(1, 3), (2, 4), (7, 4), (8, 3)]);
    }

    #[test]
    fn tab_corners() {
        assert_eq!(tab(&cfg(), 2, 0), [(8, 0), (12, 4), (20, 4), (24, 0)]);
    }

    #[test]
    fn block_with_notch() {
        let rect = PixelRect::new(0, 0, 39, 27);
        let verts = block_outline(rect, &cfg(), Connectors::BOTTOM_NOTCH);
        assert_eq!(
            verts,
            vec![
                (2, 0),
                (8, 0),
                (12, 4),
                (20, 4),
                (24, 0),
                (37, 0),
                (39, 2),
                (39, 25),
                (37, 27),
                (24, 27),
                (20, 31),
                (12, 31),
                (8, 27),
                (2, 27),
                (0, 25),
                (0, 2),
            ]
        );
    }

    #[test]
    fn last_block_has_flat_bottom() {
        let rect = PixelRect::new(0, 0, 39, 27);
        let verts = block_outline(rect, &cfg(), Connectors::empty());
        assert_eq!(verts.len(), 12);
        assert!(verts.iter().all(|&(_, y)| y <= 27));
        let shadow = block_shadow(rect, &cfg(), Connectors::empty());
        assert!(shadow.iter().all(|&(_, y)| y <= 27));
    }

    #[test]
    fn block_strokes() {
        let rect = PixelRect::new(0, 0, 39, 27);
        assert_eq!(
            block_highlight(rect, &cfg()),
            vec![
                (1, 2),
                (2, 1),
                (8, 1),
                (12, 5),
                (20, 5),
                (24, 1),
                (37, 1),
                (38, 2)
            ]
        );
        assert_eq!(
            block_shadow(rect, &cfg(), Connectors::BOTTOM_NOTCH),
            vec![
                (1, 25),
                (2, 26),
                (8, 26),
                (12, 30),
                (20, 30),
                (24, 26),
                (37, 26),
                (38, 25)
            ]
        );
    }

    #[test]
    fn c_outline_walks_the_mouth() {
        let shape = CShape {
            header: PixelRect::new(0, 0, 59, 27),
            mouth_height: 20,
        };
        let verts = c_outline(shape, &cfg(), Connectors::all());
        assert_eq!(verts.len(), 32);
        assert_eq!(verts[0], (2, 0));
        // header notch, right to left, hooked at x0 + c_width + r
        assert_eq!(&verts[9..13], &[(40, 27), (36, 31), (28, 31), (24, 27)]);
        // left wall of the mouth
        assert_eq!(&verts[13..17], &[(18, 27), (16, 29), (16, 45), (18, 47)]);
        // inner tab on the bottom bar
        assert_eq!(&verts[17..21], &[(24, 47), (28, 51), (36, 51), (40, 47)]);
        // bottom notch dips below the bottom bar (y = 27 + 20 + 16)
        assert_eq!(&verts[25..29], &[(24, 63), (20, 67), (12, 67), (8, 63)]);
        assert_eq!(verts[31], (0, 2));
    }

    #[test]
    fn c_outline_optional_connectors() {
        let shape = CShape {
            header: PixelRect::new(0, 0, 59, 27),
            mouth_height: 20,
        };
        assert_eq!(c_outline(shape, &cfg(), Connectors::empty()).len(), 24);
        assert_eq!(c_outline(shape, &cfg(), Connectors::INNER_TAB).len(), 28);
    }

    #[test]
    fn c_strokes() {
        let shape = CShape {
            header: PixelRect::new(0, 0, 59, 27),
            mouth_height: 20,
        };
        let [top, bar] = c_highlights(shape, &cfg(), Connectors::empty());
        assert_eq!(top.len(), 8);
        assert_eq!(bar, vec![(16, 46), (18, 48), (57, 48), (58, 49)]);

        let [bottom, header] = c_shadows(shape, &cfg(), Connectors::empty());
        assert_eq!(bottom, vec![(1, 61), (2, 62), (57, 62), (58, 61)]);
        assert_eq!(
            header,
            vec![
                (16, 28),
                (18, 26),
                (24, 26),
                (28, 30),
                (36, 30),
                (40, 26),
                (57, 26),
                (58, 25)
            ]
        );
    }

    #[test]
    fn draw_skips_missing_strokes() {
        let mut surface = RecordingSurface::new();
        let style = BlockStyle::default().with_background(Some(Rgb::WHITE));
        draw_block(
            &mut surface,
            PixelRect::new(0, 0, 39, 27),
            &cfg(),
            &style,
            Connectors::BOTTOM_NOTCH,
        )
        .unwrap();
        assert_eq!(surface.ops().len(), 1);
        assert!(matches!(
            &surface.ops()[0],
            DrawOp::Polygon { fill: Some(_), outline: None, .. }
        ));
    }

    #[test]
    fn rounded_rect_draws_strokes_as_lines() {
        let mut surface = RecordingSurface::new();
        let paint = Paint {
            fill: Some(Rgb::WHITE),
            outline: Some(Rgb::BLACK),
            highlight: Some(Rgb::WHITE),
            shadow: Some(Rgb::BLACK),
        };
        draw_rounded_rect(&mut surface, PixelRect::new(0, 0, 9, 9), 2, paint).unwrap();
        // polygon + 3 highlight segments + 3 shadow segments
        assert_eq!(surface.ops().len(), 7);
    }
}
