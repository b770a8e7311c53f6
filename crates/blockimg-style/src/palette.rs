#![forbid(unsafe_code)]

use blockimg_render::Rgb;

/// Colors for one block category.
///
/// A `None` color means the corresponding fill, stroke or text is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockStyle {
    pub background: Option<Rgb>,
    /// Plain text, and the text inside dropdown menus.
    pub foreground: Option<Rgb>,
    pub outline: Option<Rgb>,
    /// Inner stroke along the top/left edges.
    pub highlight: Option<Rgb>,
    /// Inner stroke along the bottom/right edges.
    pub shadow: Option<Rgb>,
    pub menu_background: Option<Rgb>,
}

impl BlockStyle {
    /// A fully opaque palette in theme-table column order.
    ///
    /// Dropdown menus reuse the shadow color as their background.
    #[must_use]
    pub const fn from_columns(
        foreground: Rgb,
        highlight: Rgb,
        background: Rgb,
        shadow: Rgb,
        outline: Rgb,
    ) -> Self {
        Self {
            background: Some(background),
            foreground: Some(foreground),
            outline: Some(outline),
            highlight: Some(highlight),
            shadow: Some(shadow),
            menu_background: Some(shadow),
        }
    }

    #[must_use]
    pub const fn with_background(mut self, color: Option<Rgb>) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub const fn with_foreground(mut self, color: Option<Rgb>) -> Self {
        self.foreground = color;
        self
    }

    #[must_use]
    pub const fn with_outline(mut self, color: Option<Rgb>) -> Self {
        self.outline = color;
        self
    }

    #[must_use]
    pub const fn with_highlight(mut self, color: Option<Rgb>) -> Self {
        self.highlight = color;
        self
    }

    #[must_use]
    pub const fn with_shadow(mut self, color: Option<Rgb>) -> Self {
        self.shadow = color;
        self
    }

    #[must_use]
    pub const fn with_menu_background(mut self, color: Option<Rgb>) -> Self {
        self.menu_background = color;
        self
    }
}
