#![forbid(unsafe_code)]

//! One-shot rendering of a whole diagram into a pixel canvas.

use blockimg_render::{Canvas, OutlineFont, Rgb, SurfaceError};
use blockimg_style::LayoutConfig;

use crate::context::{Context, Layout};
use crate::stack::Stack;

/// Measure `root`, allocate a canvas exactly that size plus `margin` on
/// every side, and draw the stack at `(margin, margin)`.
///
/// Measurement runs against the canvas's own text metrics, so the result
/// is tight: nothing is drawn into the margin.
pub fn render_to_canvas(
    root: &Stack,
    config: &LayoutConfig,
    margin: i32,
    background: Rgb,
) -> Result<Canvas, SurfaceError> {
    render_with_font(root, config, margin, background, None)
}

/// [`render_to_canvas`], measuring and drawing text with `font` when given
/// instead of the built-in bitmap glyphs.
pub fn render_with_font(
    root: &Stack,
    config: &LayoutConfig,
    margin: i32,
    background: Rgb,
    font: Option<&OutlineFont>,
) -> Result<Canvas, SurfaceError> {
    let blank = |width: u32, height: u32| {
        let canvas = Canvas::new(width, height, background);
        match font {
            Some(font) => canvas.with_font(font.clone()),
            None => canvas,
        }
    };

    let margin = margin.max(0);
    let extent = {
        let mut measure = blank(0, 0);
        let ctx = Context::new(&mut measure, config);
        root.bounding_box(&ctx)?
    };

    let span = blockimg_core::debug_span!(
        "render_pass",
        width = extent.width,
        height = extent.height,
        margin
    );
    let _guard = span.enter();

    let outer = extent.outset(margin);
    let mut canvas = blank(outer.width.max(0) as u32, outer.height.max(0) as u32);
    {
        let mut ctx = Context::new(&mut canvas, config);
        root.render(&mut ctx, margin, margin)?;
    }
    blockimg_core::debug!(
        width = canvas.width(),
        height = canvas.height(),
        items = root.items.len(),
        "diagram rendered"
    );
    Ok(canvas)
}
