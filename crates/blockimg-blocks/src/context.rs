#![forbid(unsafe_code)]

use blockimg_core::geometry::{Extent, Point};
use blockimg_render::{Rgb, Surface, SurfaceError};
use blockimg_style::LayoutConfig;

/// A render pass: the surface being drawn on plus the layout settings.
///
/// The context borrows the surface exclusively for its whole lifetime, so
/// one surface serves one pass at a time.
pub struct Context<'a> {
    surface: &'a mut dyn Surface,
    config: &'a LayoutConfig,
}

impl<'a> Context<'a> {
    pub fn new(surface: &'a mut dyn Surface, config: &'a LayoutConfig) -> Self {
        Self { surface, config }
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    /// The underlying surface, for drawing shapes.
    #[inline]
    pub fn surface(&mut self) -> &mut dyn Surface {
        &mut *self.surface
    }

    /// Width and height of `text` as the surface would draw it.
    pub fn text_extent(&self, text: &str) -> Result<Extent, SurfaceError> {
        self.surface
            .measure_text(text)
            .map(Extent::from_text_bounds)
    }

    /// Draw `text`, or nothing when `color` is unset.
    pub(crate) fn text(
        &mut self,
        position: Point,
        text: &str,
        color: Option<Rgb>,
    ) -> Result<(), SurfaceError> {
        match color {
            Some(color) => self.surface.draw_text(position, text, color),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

/// A node that can be measured and drawn.
///
/// `render(ctx, x, y)` draws only inside
/// `bounding_box(ctx)?.to_rect(x, y)`.
pub trait Layout {
    /// Size of the node as drawn, including any connector it reserves.
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError>;

    /// Draw the node with its top-left corner at `(x, y)`.
    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError>;
}
