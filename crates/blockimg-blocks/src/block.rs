#![forbid(unsafe_code)]

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;
use blockimg_style::{BlockStyle, LayoutConfig};

use crate::context::{Context, Layout};
use crate::row::{BoxItem, Row};
use crate::shapes::{Connectors, draw_block};

/// A single command: a tabbed shape around a row of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub style: BlockStyle,
    pub items: Vec<BoxItem>,
    /// Ends its stack: no notch along the bottom edge.
    pub is_last: bool,
}

impl Block {
    pub fn new(style: BlockStyle, items: Vec<BoxItem>) -> Self {
        Self {
            style,
            items,
            is_last: false,
        }
    }

    /// Mark this block as the visual end of its stack.
    #[must_use]
    pub fn last(mut self) -> Self {
        self.is_last = true;
        self
    }

    fn row<'a>(&'a self, config: &LayoutConfig) -> Row<'a> {
        Row::new(&self.items, &self.style, config.gap, config.min_block_height)
    }

    /// The shape's body, without the notch below it.
    ///
    /// Never narrower than the top tab needs.
    fn body(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let config = ctx.config();
        let body = self
            .row(config)
            .bounding_box(ctx)?
            .outset_x(config.padding_x)
            .outset_y(config.padding_y);
        Ok(Extent::new(body.width.max(config.min_block_width()), body.height))
    }
}

impl Layout for Block {
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let mut extent = self.body(ctx)?;
        if !self.is_last {
            extent = extent.grow_y(ctx.config().tab_height);
        }
        blockimg_core::trace!(
            width = extent.width,
            height = extent.height,
            is_last = self.is_last,
            "block measured"
        );
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let config = *ctx.config();
        let rect = self.body(ctx)?.to_rect(x, y);
        draw_block(
            ctx.surface(),
            rect,
            &config,
            &self.style,
            Connectors::for_block(self.is_last),
        )?;
        self.row(&config)
            .render(ctx, x + config.padding_x, y + config.padding_y)
    }
}
