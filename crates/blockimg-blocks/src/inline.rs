#![forbid(unsafe_code)]

//! Inline value leaves: editable literals and dropdown menus.

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;
use blockimg_style::BlockStyle;

use crate::context::Context;
use crate::shapes::{Paint, draw_rounded_rect};

/// An editable constant, drawn in the fixed literal colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Text extent plus the configured padding on every side.
    pub fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        padded_text(ctx, &self.value)
    }

    /// Draw at `(x, y)`. `owner` is the enclosing block's palette; only its
    /// outline color is used.
    pub fn render(
        &self,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        owner: &BlockStyle,
    ) -> Result<(), SurfaceError> {
        let config = *ctx.config();
        let rect = self.bounding_box(ctx)?.to_rect(x, y);
        draw_rounded_rect(
            ctx.surface(),
            rect,
            config.literal_roundness,
            Paint::flat(config.literal_background, owner.outline),
        )?;
        ctx.text(
            (x + config.padding_x, y + config.padding_y),
            &self.value,
            config.literal_foreground,
        )
    }
}

/// A dropdown selection, drawn in the enclosing block's colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Menu {
    pub value: String,
}

impl Menu {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        padded_text(ctx, &self.value)
    }

    /// Draw at `(x, y)` using `owner`'s menu background, outline and
    /// foreground.
    pub fn render(
        &self,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        owner: &BlockStyle,
    ) -> Result<(), SurfaceError> {
        let config = *ctx.config();
        let rect = self.bounding_box(ctx)?.to_rect(x, y);
        draw_rounded_rect(
            ctx.surface(),
            rect,
            config.literal_roundness,
            Paint::flat(owner.menu_background, owner.outline),
        )?;
        ctx.text(
            (x + config.padding_x, y + config.padding_y),
            &self.value,
            owner.foreground,
        )
    }
}

fn padded_text(ctx: &Context<'_>, text: &str) -> Result<Extent, SurfaceError> {
    let config = ctx.config();
    let extent = ctx
        .text_extent(text)?
        .outset_x(config.padding_x)
        .outset_y(config.padding_y);
    blockimg_core::trace!(text, width = extent.width, height = extent.height, "inline measured");
    Ok(extent)
}
