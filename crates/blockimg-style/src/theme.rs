#![forbid(unsafe_code)]

//! Category themes.
//!
//! A theme table is plain text, one category per line:
//!
//! ```text
//! CATEGORY   FOREGROUND  HIGHLIGHT   BACKGROUND  SHADOW      OUTLINE
//! motion     #a2beff     #5b84ff     #4a6cd4     #4160be     #304891
//! ```
//!
//! The header line is optional, blank lines and `#` comments are skipped,
//! and a color may be `none` to leave that stroke out. Menus take their
//! background from the shadow column.
//!
//! # Example
//! ```
//! use blockimg_style::Theme;
//!
//! let theme = Theme::parse("ghost #ffffff none #000000 #111111 #222222").unwrap();
//! let ghost = theme.get("ghost").unwrap();
//! assert!(ghost.highlight.is_none());
//! assert_eq!(ghost.menu_background, ghost.shadow);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use blockimg_render::Rgb;

use crate::palette::BlockStyle;

/// The built-in table.
const DEFAULT_TABLE: &str = "
CATEGORY   FOREGROUND  HIGHLIGHT   BACKGROUND  SHADOW      OUTLINE
motion     #a2beff     #5b84ff     #4a6cd4     #4160be     #304891
looks      #d7abff     #a868ff     #8a55d7     #7b4bc0     #5d3893
sound      #ff9bff     #e252ec     #bb42c3     #a73aae     #802a85
events     #ffd18c     #f29f3c     #c88330     #b3752a     #89581e
control    #fff17a     #ffcd22     #e1a91a     #c99716     #9a730e
sensing    #89edff     #37c8ff     #2ca5e2     #2693ca     #1b709b
operators  #b1fc73     #71dd18     #5cb712     #52a40f     #3d7d09
variables  #ffcc77     #ff981d     #ee7d16     #d56f12     #a3540b
lists      #ffaf80     #f76f2b     #cc5b22     #b7511d     #8c3c14
custom     #b68ae4     #7939ba     #632d99     #582789     #421c68
";

const COLUMNS: usize = 6;

/// A set of named category palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: BTreeMap<String, BlockStyle>,
}

impl Default for Theme {
    /// The ten standard categories.
    fn default() -> Self {
        // The built-in table is covered by tests; an empty theme is the
        // only possible fallback.
        Self::parse(DEFAULT_TABLE).unwrap_or_else(|_| Self::empty())
    }
}

impl Theme {
    /// A theme with no categories.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Parse a theme table. See the module docs for the format.
    pub fn parse(text: &str) -> Result<Self, ThemeParseError> {
        let mut theme = Self::empty();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields[0].eq_ignore_ascii_case("category") {
                continue;
            }
            if fields.len() != COLUMNS {
                return Err(ThemeParseError::new(
                    line_no,
                    format!("expected {COLUMNS} columns, found {}", fields.len()),
                ));
            }
            let color = |column: usize| -> Result<Option<Rgb>, ThemeParseError> {
                parse_optional_color(fields[column])
                    .map_err(|err| ThemeParseError::new(line_no, err.to_string()))
            };
            let style = BlockStyle {
                foreground: color(1)?,
                highlight: color(2)?,
                background: color(3)?,
                shadow: color(4)?,
                outline: color(5)?,
                menu_background: color(4)?,
            };
            let category = fields[0];
            if theme.styles.insert(category.to_string(), style).is_some() {
                blockimg_core::warn!(
                    line = line_no,
                    category,
                    "duplicate theme category, later entry wins"
                );
            }
        }
        blockimg_core::debug!(categories = theme.styles.len(), "theme parsed");
        Ok(theme)
    }

    /// Add or replace a category.
    pub fn define(&mut self, category: impl Into<String>, style: BlockStyle) {
        self.styles.insert(category.into(), style);
    }

    /// Look up a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&BlockStyle> {
        self.styles.get(category)
    }

    /// Look up a category, failing with the missing name.
    pub fn require(&self, category: &str) -> Result<BlockStyle, UnknownCategory> {
        self.get(category).copied().ok_or_else(|| UnknownCategory {
            category: category.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.styles.contains_key(category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Merge `other` into `self`; categories in `other` win.
    pub fn extend(&mut self, other: &Theme) {
        for (name, style) in &other.styles {
            self.styles.insert(name.clone(), *style);
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_optional_color(field: &str) -> Result<Option<Rgb>, blockimg_render::ColorParseError> {
    if field.eq_ignore_ascii_case("none") || field == "-" {
        return Ok(None);
    }
    Rgb::parse(field).map(Some)
}

/// A theme table line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl ThemeParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ThemeParseError {}

/// A category the theme does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    pub category: String,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme has no category {:?}", self.category)
    }
}

impl std::error::Error for UnknownCategory {}
