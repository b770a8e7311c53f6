#![forbid(unsafe_code)]

//! Vertical sequences of interlocking blocks.

use blockimg_core::geometry::Extent;
use blockimg_render::SurfaceError;

use crate::block::Block;
use crate::cblock::CBlock;
use crate::context::{Context, Layout};

/// Something that can sit in a stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackItem {
    Block(Block),
    C(CBlock),
}

impl StackItem {
    #[must_use]
    pub fn is_last(&self) -> bool {
        match self {
            Self::Block(block) => block.is_last,
            Self::C(c) => c.is_last,
        }
    }
}

impl Layout for StackItem {
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        match self {
            Self::Block(block) => block.bounding_box(ctx),
            Self::C(c) => c.bounding_box(ctx),
        }
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        match self {
            Self::Block(block) => block.render(ctx, x, y),
            Self::C(c) => c.render(ctx, x, y),
        }
    }
}

impl From<Block> for StackItem {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<CBlock> for StackItem {
    fn from(c: CBlock) -> Self {
        Self::C(c)
    }
}

/// Blocks drawn top to bottom, each one's tab hooked into the notch of the
/// one above.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Stack {
    pub items: Vec<StackItem>,
}

impl Stack {
    pub fn new(items: Vec<StackItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the final item ends the stack. False for an empty stack.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.items.last().is_some_and(StackItem::is_last)
    }

    /// Height the stack claims when hooked into a C block's mouth.
    ///
    /// Each item is counted without its overlap of `tab_height + 1` rows,
    /// and the final overlap is added back only if the stack continues
    /// below. A stack that ends with a last item therefore reports
    /// `tab_height + 1` rows less than it draws; the surrounding C bar
    /// absorbs them.
    pub fn interlock_extent(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let overlap = ctx.config().tab_height + 1;
        let mut extent = Extent::ZERO;
        for item in &self.items {
            extent = extent.place_below(item.bounding_box(ctx)?.shrink_y(overlap));
        }
        if !self.items.is_empty() && !self.is_last() {
            extent = extent.grow_y(overlap);
        }
        Ok(extent)
    }
}

impl Layout for Stack {
    /// The area the stack actually draws over.
    fn bounding_box(&self, ctx: &Context<'_>) -> Result<Extent, SurfaceError> {
        let mut extent = self.interlock_extent(ctx)?;
        if self.is_last() {
            extent = extent.grow_y(ctx.config().tab_height + 1);
        }
        blockimg_core::trace!(
            items = self.items.len(),
            width = extent.width,
            height = extent.height,
            "stack measured"
        );
        Ok(extent)
    }

    fn render(&self, ctx: &mut Context<'_>, x: i32, y: i32) -> Result<(), SurfaceError> {
        let overlap = ctx.config().tab_height + 1;
        let mut y = y;
        for item in &self.items {
            let height = item.bounding_box(ctx)?.height;
            item.render(ctx, x, y)?;
            y += height - overlap;
        }
        Ok(())
    }
}

impl From<Block> for Stack {
    fn from(block: Block) -> Self {
        Self::new(vec![block.into()])
    }
}

impl From<CBlock> for Stack {
    fn from(c: CBlock) -> Self {
        Self::new(vec![c.into()])
    }
}

impl From<StackItem> for Stack {
    fn from(item: StackItem) -> Self {
        Self::new(vec![item])
    }
}

impl FromIterator<StackItem> for Stack {
    fn from_iter<I: IntoIterator<Item = StackItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
