#![forbid(unsafe_code)]

//! Styling for block diagrams.
//!
//! - [`BlockStyle`]: the colors of one block category.
//! - [`Theme`]: category name to [`BlockStyle`], parsed from a flat table.
//! - [`LayoutConfig`]: global paddings, radii and connector geometry.
//!
//! Everything here is a plain value. Build a theme and a config once, then
//! pass them into tree construction and rendering; nothing is global.

pub mod config;
pub mod palette;
pub mod theme;

pub use config::{LayoutConfig, LayoutConfigError, LayoutConfigParse};
pub use palette::BlockStyle;
pub use theme::{Theme, ThemeParseError, UnknownCategory};
