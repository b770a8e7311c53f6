#![forbid(unsafe_code)]

//! Wrapping control blocks (`if`, `repeat`, ...).

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;
use blockimg_style::{BlockStyle, LayoutConfig};

use crate::context::{Context, Layout};
use crate::row::{BoxItem, Row};
use crate::shapes::{CShape, Connectors, draw_c};
use crate::stack::Stack;

/// A C-shaped block: a header row, a mouth holding a nested stack, and a
/// bottom bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CBlock {
    pub style: BlockStyle,
    pub items: Vec<BoxItem>,
    pub stack: Stack,
    /// Ends its enclosing stack: no notch under the bottom bar.
    pub is_last: bool,
}

/// Measurements shared by `bounding_box` and `render`.
struct Metrics {
    /// Header row content, before padding.
    row: Extent,
    /// Header bar including padding.
    header: Extent,
    /// Nested stack as hooked into the mouth.
    inner: Extent,
    /// Rows between the header bar and the bottom bar.
    mouth_height: i32,
    stack_is_last: bool,
}

impl CBlock {
    pub fn new(style: BlockStyle, items: Vec<BoxItem>, stack: Stack) -> Self {
        Self {
            style,
            items,
            stack,
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

    fn metrics(&self, ctx: &Context<'_>) -> Result<Metrics, SurfaceError> {
        let config = ctx.config();
        let row = self.row(config).bounding_box(ctx)?;
        let padded = row.outset_x(config.padding_x).outset_y(config.padding_y);
        let header = Extent::new(padded.width.max(config.min_c_width()), padded.height);

        let stack_is_last = self.stack.is_last();
        let inner = self.stack.interlock_extent(ctx)?;
        let mut mouth_height = inner.height.max(config.c_min_height);
        if !stack_is_last {
            mouth_height -= config.tab_height + 1;
        }
        Ok(Metrics {
            row,
            header,
            inner,
            mouth_height,
            stack_is_last,
        })
    }

    fn connectors(&self, stack_is_last: bool) -> Connectors {
        let mut connectors = Connectors::for_block(self.is_last);
        connectors.set(Connectors::INNER_TAB, !stack_is_last);
        connectors
    }
}

impl Layout for CBlock {
    /// Header bar stacked on the indented mouth (at least `c_min_height`
    /// tall), the bottom bar, and the outer notch unless last.
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let config = ctx.config();
        let Metrics {
            header,
            inner,
            stack_is_last,
            ..
        } = self.metrics(ctx)?;
        let mouth = Extent::new(
            inner.width + config.c_width,
            inner.height.max(config.c_min_height),
        );

        let mut extent = header.place_below(mouth);
        if !stack_is_last {
            extent = extent.shrink_y(config.tab_height + 1);
        }
        extent = extent.grow_y(config.c_width);
        if !self.is_last {
            extent = extent.grow_y(config.tab_height);
        }
        blockimg_core::trace!(
            width = extent.width,
            height = extent.height,
            nested = self.stack.items.len(),
            "c block measured"
        );
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let config = *ctx.config();
        let metrics = self.metrics(ctx)?;
        let shape = CShape {
            header: metrics.header.to_rect(x, y),
            mouth_height: metrics.mouth_height,
        };
        draw_c(
            ctx.surface(),
            shape,
            &config,
            &self.style,
            self.connectors(metrics.stack_is_last),
        )?;

        self.row(&config)
            .render(ctx, x + config.padding_x, y + config.padding_y)?;

        // The first nested block's tab hooks into the header notch.
        let inner_y = y + config.padding_y + metrics.row.height + config.padding_y - 1;
        self.stack.render(ctx, x + config.c_width, inner_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use blockimg_render::{DrawOp, RecordingSurface};
    use blockimg_style::Theme;

    fn control() -> BlockStyle {
        Theme::default().require("control").unwrap()
    }

    #[test]
    fn empty_c_height() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let c = CBlock::new(control(), Vec::new(), Stack::default());
        // header 22 + 6 = 28, mouth 16 - 5, bottom bar 16, notch 4
        assert_eq!(c.bounding_box(&ctx).unwrap(), Extent::new(43, 59));
        assert_eq!(c.last().bounding_box(&ctx).unwrap(), Extent::new(43, 55));
    }

    #[test]
    fn mouth_grows_with_nested_stack() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let inner = Block::new(control(), vec!["wait".into()]);
        let inner_height = inner.bounding_box(&ctx).unwrap().height;
        assert_eq!(inner_height, 32);

        let c = CBlock::new(control(), vec!["forever".into()], inner.into());
        // 28 + (32 - 5 + 5) - 5 + 16 + 4
        assert_eq!(c.bounding_box(&ctx).unwrap().height, 75);
    }

    #[test]
    fn wide_nested_stack_widens_the_c() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let ctx = Context::new(&mut surface, &config);
        let label = "a very long block label indeed";
        let inner = Block::new(control(), vec![label.into()]);
        let inner_width = inner.bounding_box(&ctx).unwrap().width;
        let c = CBlock::new(control(), vec!["if".into()], inner.into());
        assert_eq!(
            c.bounding_box(&ctx).unwrap().width,
            inner_width + config.c_width
        );
    }

    #[test]
    fn nested_stack_hooks_into_header() {
        let config = LayoutConfig::default();
        let mut surface = RecordingSurface::new();
        let mut ctx = Context::new(&mut surface, &config);
        let inner = Block::new(control(), vec!["wait".into()]);
        let c = CBlock::new(control(), vec!["forever".into()], inner.into());
        c.render(&mut ctx, 10, 10).unwrap();

        let polygons: Vec<&Vec<(i32, i32)>> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { vertices, .. } => Some(vertices),
                _ => None,
            })
            .collect();
        assert_eq!(polygons.len(), 2);
        // header bar covers rows 10..=37; the nested block starts on row 37
        assert_eq!(polygons[1][0], (10 + 16 + 2, 37));
    }

    #[test]
    fn inner_tab_only_when_nested_stack_continues() {
        let config = LayoutConfig::default();
        let c = CBlock::new(control(), Vec::new(), Stack::default());
        assert!(c.connectors(false).contains(Connectors::INNER_TAB));
        assert!(!c.connectors(true).contains(Connectors::INNER_TAB));
        assert!(c.connectors(true).contains(Connectors::BOTTOM_NOTCH));
        assert!(c.last().connectors(true).is_empty());
        assert_eq!(config.min_c_width(), 43);
    }
}
