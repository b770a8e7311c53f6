#![forbid(unsafe_code)]

//! Layout and geometry for block-based programming diagrams.
//!
//! A diagram is a tree: a [`Stack`] of [`Block`]s and [`CBlock`]s, each
//! holding a row of [`BoxItem`]s (plain text, [`Literal`]s, [`Menu`]s, and
//! nested [`Reporter`] / [`Boolean`] expressions). Every node is measured
//! bottom-up with [`Layout::bounding_box`] and drawn top-down with
//! [`Layout::render`]; both go through a [`Context`] that pairs a drawing
//! [`Surface`](blockimg_render::Surface) with a
//! [`LayoutConfig`](blockimg_style::LayoutConfig).
//!
//! Measurement is not cached. A render pass re-measures subtrees as it
//! walks down; trees are small and the surface's text measurement is cheap.
//!
//! # Example
//!
//! ```
//! use blockimg_blocks::{Block, Context, Layout, Literal, Stack};
//! use blockimg_render::RecordingSurface;
//! use blockimg_style::{LayoutConfig, Theme};
//!
//! let theme = Theme::default();
//! let motion = theme.require("motion").unwrap();
//! let stack = Stack::new(vec![
//!     Block::new(motion, vec!["move".into(), Literal::new("10").into(), "steps".into()]).into(),
//! ]);
//!
//! let config = LayoutConfig::default();
//! let mut surface = RecordingSurface::new();
//! let mut ctx = Context::new(&mut surface, &config);
//! let extent = stack.bounding_box(&ctx).unwrap();
//! stack.render(&mut ctx, 0, 0).unwrap();
//!
//! let drawn = surface.drawn_bounds().unwrap();
//! assert!(extent.to_rect(0, 0).contains_rect(&drawn));
//! ```

mod block;
mod cblock;
mod context;
mod expr;
mod inline;
mod render;
mod row;
pub mod shapes;
mod stack;

pub use block::Block;
pub use cblock::CBlock;
pub use context::{Context, Layout};
pub use expr::{Boolean, Reporter};
pub use inline::{Literal, Menu};
pub use render::{render_to_canvas, render_with_font};
pub use row::{BoxItem, Row};
pub use stack::{Stack, StackItem};
