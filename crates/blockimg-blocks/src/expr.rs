#![forbid(unsafe_code)]

//! Expression wrappers: rounded reporters and pointed booleans.

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;
use blockimg_style::BlockStyle;

use crate::context::{Context, Layout};
use crate::row::{BoxItem, Row};
use crate::shapes::{Paint, draw_rounded_rect};

/// A value-returning expression in a rounded rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reporter {
    pub style: BlockStyle,
    pub items: Vec<BoxItem>,
}

impl Reporter {
    pub fn new(style: BlockStyle, items: Vec<BoxItem>) -> Self {
        Self { style, items }
    }

    fn row<'a>(&'a self, ctx: &Context<'_>) -> Row<'a> {
        Row::new(&self.items, &self.style, ctx.config().gap, 0)
    }
}

impl Layout for Reporter {
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let config = ctx.config();
        let extent = self
            .row(ctx)
            .bounding_box(ctx)?
            .outset_x(config.padding_x)
            .outset_y(config.padding_y);
        blockimg_core::trace!(width = extent.width, height = extent.height, "reporter measured");
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let config = *ctx.config();
        let row = self.row(ctx);
        let rect = self.bounding_box(ctx)?.to_rect(x, y);
        draw_rounded_rect(
            ctx.surface(),
            rect,
            config.reporter_roundness,
            Paint::from_style(&self.style),
        )?;
        row.render(ctx, x + config.padding_x, y + config.padding_y)
    }
}

/// A truth-valued expression.
///
/// Its horizontal padding grows with its own height, which slants the sides
/// into a point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boolean {
    pub style: BlockStyle,
    pub items: Vec<BoxItem>,
}

impl Boolean {
    pub fn new(style: BlockStyle, items: Vec<BoxItem>) -> Self {
        Self { style, items }
    }

    fn row<'a>(&'a self, ctx: &Context<'_>) -> Row<'a> {
        Row::new(&self.items, &self.style, ctx.config().gap, 0)
    }

    /// Vertically padded content extent and the derived side padding.
    ///
    /// The side padding doubles as the corner cut, so the left and right
    /// ends come to a point at mid-height.
    pub fn side_padding(&self, ctx: &Context<'_>) -> Result<(Extent, i32), SurfaceError> {
        let config = ctx.config();
        let inner = self.row(ctx).bounding_box(ctx)?.outset_y(config.padding_y);
        let padding_x = inner.height.div_euclid(2) - config.boolean_roundness;
        Ok((inner, padding_x))
    }
}

impl Layout for Boolean {
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let (inner, padding_x) = self.side_padding(ctx)?;
        let extent = inner.outset_x(padding_x);
        blockimg_core::trace!(
            width = extent.width,
            height = extent.height,
            padding_x,
            "boolean measured"
        );
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let padding_y = ctx.config().padding_y;
        let (inner, padding_x) = self.side_padding(ctx)?;
        let rect = inner.outset_x(padding_x).to_rect(x, y);
        draw_rounded_rect(
            ctx.surface(),
            rect,
            padding_x,
            Paint::from_style(&self.style),
        )?;
        self.row(ctx).render(ctx, x + padding_x, y + padding_y)
    }
}
