#![forbid(unsafe_code)]

//! Horizontal item rows.

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;
use blockimg_style::BlockStyle;

use crate::context::{Context, Layout};
use crate::expr::{Boolean, Reporter};
use crate::inline::{Literal, Menu};

/// One entry in a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoxItem {
    /// Plain label text in the row's foreground color.
    Text(String),
    Literal(Literal),
    Menu(Menu),
    Reporter(Reporter),
    Boolean(Boolean),
}

impl BoxItem {
    pub fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        match self {
            Self::Text(text) => ctx.text_extent(text),
            Self::Literal(literal) => literal.bounding_box(ctx),
            Self::Menu(menu) => menu.bounding_box(ctx),
            Self::Reporter(reporter) => reporter.bounding_box(ctx),
            Self::Boolean(boolean) => boolean.bounding_box(ctx),
        }
    }

    /// Draw at `(x, y)`. Leaves take their colors from `owner`.
    pub fn render(
        &self,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        owner: &BlockStyle,
    ) -> Result<(), SurfaceError> {
        match self {
            Self::Text(text) => ctx.text((x, y), text, owner.foreground),
            Self::Literal(literal) => literal.render(ctx, x, y, owner),
            Self::Menu(menu) => menu.render(ctx, x, y, owner),
            Self::Reporter(reporter) => reporter.render(ctx, x, y),
            Self::Boolean(boolean) => boolean.render(ctx, x, y),
        }
    }
}

impl From<&str> for BoxItem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for BoxItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Literal> for BoxItem {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Menu> for BoxItem {
    fn from(menu: Menu) -> Self {
        Self::Menu(menu)
    }
}

impl From<Reporter> for BoxItem {
    fn from(reporter: Reporter) -> Self {
        Self::Reporter(reporter)
    }
}

impl From<Boolean> for BoxItem {
    fn from(boolean: Boolean) -> Self {
        Self::Boolean(boolean)
    }
}

/// Items laid out left to right, each centered vertically.
///
/// A row borrows its items: blocks and expressions own their item lists and
/// lay them out through a row built on the spot.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    items: &'a [BoxItem],
    style: &'a BlockStyle,
    gap: i32,
    min_height: i32,
}

impl<'a> Row<'a> {
    pub fn new(items: &'a [BoxItem], style: &'a BlockStyle, gap: i32, min_height: i32) -> Self {
        Self {
            items,
            style,
            gap,
            min_height,
        }
    }

    pub fn items(&self) -> &'a [BoxItem] {
        self.items
    }
}

impl Layout for Row<'_> {
    /// Items side by side with `gap` between neighbours, at least
    /// `min_height` tall. An empty row is `(0, min_height)`.
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let mut extent = Extent::new(0, self.min_height);
        for item in self.items {
            extent = extent.place_beside(item.bounding_box(ctx)?);
        }
        if let Some(gaps) = self.items.len().checked_sub(1) {
            extent = extent.grow_x(self.gap * gaps as i32);
        }
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let height = self.bounding_box(ctx)?.height;
        let mut x = x;
        for item in self.items {
            let item_extent = item.bounding_box(ctx)?;
            let dy = (height - item_extent.height).div_euclid(2);
            item.render(ctx, x, y + dy, self.style)?;
            x += item_extent.width + self.gap;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockimg_render::{DrawOp, RecordingSurface};
    use blockimg_style::LayoutConfig;

    fn items() -> Vec<BoxItem> {
        vec!["move".into(), Literal::new("10").into(), "steps".into()]
    }

    #[test]
    fn empty_row_is_min_height() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let style = BlockStyle::default();
        let row = Row::new(&[], &style, 4, 22);
        assert_eq!(row.bounding_box(&ctx).unwrap(), Extent::new(0, 22));
    }

    #[test]
    fn row_adds_gaps_between_items() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let style = BlockStyle::default();
        let items = items();
        // "move" 24x7, literal 24x13, "steps" 30x7, two gaps of 4
        let row = Row::new(&items, &style, 4, 0);
        assert_eq!(row.bounding_box(&ctx).unwrap(), Extent::new(86, 13));
        let single = Row::new(&items[..1], &style, 4, 0);
        assert_eq!(single.bounding_box(&ctx).unwrap(), Extent::new(24, 7));
    }

    #[test]
    fn render_centers_and_advances() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let style = BlockStyle::default().with_foreground(Some(blockimg_render::Rgb::WHITE));
        let items = items();
        Row::new(&items, &style, 4, 22).render(&mut ctx, 10, 100).unwrap();

        let texts: Vec<(i32, i32)> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        // label, literal text (inside its padding), label
        assert_eq!(texts, vec![(10, 107), (44, 107), (66, 107)]);
    }

    #[test]
    fn labels_without_foreground_are_skipped() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let style = BlockStyle::default();
        let items: Vec<BoxItem> = vec!["hidden".into()];
        Row::new(&items, &style, 4, 0).render(&mut ctx, 0, 0).unwrap();
        assert!(surface.ops().is_empty());
    }
}
