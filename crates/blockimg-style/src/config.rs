#![forbid(unsafe_code)]

//! Global layout configuration.
//!
//! # Environment variables
//!
//! [`LayoutConfig::from_env`] starts from the defaults and applies any of:
//!
//! - `BLOCKIMG_MIN_BLOCK_HEIGHT` (i32)
//! - `BLOCKIMG_PADDING_X` / `BLOCKIMG_PADDING_Y` (i32)
//! - `BLOCKIMG_GAP` (i32)
//! - `BLOCKIMG_BLOCK_ROUNDNESS`, `BLOCKIMG_REPORTER_ROUNDNESS`,
//!   `BLOCKIMG_BOOLEAN_ROUNDNESS`, `BLOCKIMG_LITERAL_ROUNDNESS`,
//!   `BLOCKIMG_C_ROUNDNESS` (i32)
//! - `BLOCKIMG_C_WIDTH` / `BLOCKIMG_C_MIN_HEIGHT` (i32)
//! - `BLOCKIMG_TAB_PADDING` / `BLOCKIMG_TAB_WIDTH` / `BLOCKIMG_TAB_HEIGHT` (i32)
//! - `BLOCKIMG_LITERAL_BACKGROUND` / `BLOCKIMG_LITERAL_FOREGROUND` (color)
//!
//! Malformed values are reported, not fatal: the default stays in place.

use std::env;
use std::fmt;

use blockimg_render::Rgb;

const ENV_MIN_BLOCK_HEIGHT: &str = "BLOCKIMG_MIN_BLOCK_HEIGHT";
const ENV_PADDING_X: &str = "BLOCKIMG_PADDING_X";
const ENV_PADDING_Y: &str = "BLOCKIMG_PADDING_Y";
const ENV_GAP: &str = "BLOCKIMG_GAP";
const ENV_BLOCK_ROUNDNESS: &str = "BLOCKIMG_BLOCK_ROUNDNESS";
const ENV_REPORTER_ROUNDNESS: &str = "BLOCKIMG_REPORTER_ROUNDNESS";
const ENV_BOOLEAN_ROUNDNESS: &str = "BLOCKIMG_BOOLEAN_ROUNDNESS";
const ENV_LITERAL_ROUNDNESS: &str = "BLOCKIMG_LITERAL_ROUNDNESS";
const ENV_C_ROUNDNESS: &str = "BLOCKIMG_C_ROUNDNESS";
const ENV_C_WIDTH: &str = "BLOCKIMG_C_WIDTH";
const ENV_C_MIN_HEIGHT: &str = "BLOCKIMG_C_MIN_HEIGHT";
const ENV_TAB_PADDING: &str = "BLOCKIMG_TAB_PADDING";
const ENV_TAB_WIDTH: &str = "BLOCKIMG_TAB_WIDTH";
const ENV_TAB_HEIGHT: &str = "BLOCKIMG_TAB_HEIGHT";
const ENV_LITERAL_BACKGROUND: &str = "BLOCKIMG_LITERAL_BACKGROUND";
const ENV_LITERAL_FOREGROUND: &str = "BLOCKIMG_LITERAL_FOREGROUND";

/// Paddings, corner radii and connector geometry shared by a whole tree.
///
/// Negative values are accepted and render as visibly broken shapes;
/// [`LayoutConfig::validate`] reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Minimum height of the item row inside a block or C header.
    pub min_block_height: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    /// Horizontal space between items in a row.
    pub gap: i32,
    pub block_roundness: i32,
    pub reporter_roundness: i32,
    pub boolean_roundness: i32,
    pub literal_roundness: i32,
    pub c_roundness: i32,
    /// Width of a C block's left bar, and height of its bottom bar.
    pub c_width: i32,
    /// Minimum height of a C block's mouth.
    pub c_min_height: i32,
    /// Distance from the rounded corner to the start of the tab.
    pub tab_padding: i32,
    /// Width of the flat bottom of the tab.
    pub tab_width: i32,
    /// Depth of the tab; also the width of each of its slanted sides.
    pub tab_height: i32,
    pub literal_background: Option<Rgb>,
    pub literal_foreground: Option<Rgb>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_block_height: 22,
            padding_x: 6,
            padding_y: 3,
            gap: 4,
            block_roundness: 2,
            reporter_roundness: 2,
            boolean_roundness: 2,
            literal_roundness: 2,
            c_roundness: 2,
            c_width: 16,
            c_min_height: 16,
            tab_padding: 6,
            tab_width: 8,
            tab_height: 4,
            literal_background: Some(Rgb::WHITE),
            literal_foreground: Some(Rgb::BLACK),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct LayoutConfigParse {
    pub config: LayoutConfig,
    pub errors: Vec<LayoutConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl LayoutConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for LayoutConfigError {}

impl LayoutConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> LayoutConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> LayoutConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(get: F) -> LayoutConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        from_env_with(get)
    }

    /// Validate config constraints and return all violations.
    ///
    /// Lengths must be non-negative. Once they are, the relations that keep
    /// every shape inside the box it measures are checked too.
    pub fn validate(&self) -> Result<(), Vec<LayoutConfigError>> {
        let mut errors = Vec::new();
        for (field, value) in self.lengths() {
            validate_non_negative(field, value, &mut errors);
        }
        if errors.is_empty() {
            self.validate_relations(&mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_relations(&self, errors: &mut Vec<LayoutConfigError>) {
        let mut check = |ok: bool, field: &'static str, value: i32, message: &'static str| {
            if !ok {
                errors.push(LayoutConfigError::new(field, value.to_string(), message));
            }
        };

        check(
            self.c_width >= self.c_roundness * 2,
            "c_width",
            self.c_width,
            "c_width must fit both corners of the C bar (>= 2 * c_roundness)",
        );
        check(
            self.tab_height < self.c_width,
            "tab_height",
            self.tab_height,
            "the inner tab must end inside the C bar (< c_width)",
        );
        check(
            self.c_min_height >= self.tab_height + 1 + self.c_roundness * 2,
            "c_min_height",
            self.c_min_height,
            "an empty mouth must fit the header notch and both corners \
             (>= tab_height + 1 + 2 * c_roundness)",
        );

        let shortest_body = self.min_block_height + self.padding_y * 2;
        let corners = self.block_roundness.max(self.c_roundness);
        check(
            shortest_body >= (self.tab_height + 2).max(corners + 1),
            "min_block_height",
            self.min_block_height,
            "blocks must be taller than their top tab and corners \
             (min_block_height + 2 * padding_y >= tab_height + 2)",
        );

        for (field, roundness) in [
            ("literal_roundness", self.literal_roundness),
            ("reporter_roundness", self.reporter_roundness),
        ] {
            check(
                roundness < self.padding_x * 2 && roundness < self.padding_y * 2,
                field,
                roundness,
                "an empty inline shape must fit its corners (< 2 * padding)",
            );
        }
        check(
            self.boolean_roundness < self.padding_y,
            "boolean_roundness",
            self.boolean_roundness,
            "boolean points need at least one pixel of side padding (< padding_y)",
        );
    }

    /// Horizontal distance from a shape's left edge to the far side of its
    /// top tab.
    #[must_use]
    pub const fn tab_reach(&self, roundness: i32) -> i32 {
        roundness + self.tab_padding + self.tab_height + self.tab_width + self.tab_height
    }

    /// Narrowest block whose top tab still fits before its right corner.
    #[must_use]
    pub const fn min_block_width(&self) -> i32 {
        self.tab_reach(self.block_roundness) + self.block_roundness + 1
    }

    /// Narrowest C block whose inner tab still fits before its right corner.
    #[must_use]
    pub const fn min_c_width(&self) -> i32 {
        self.c_width + self.tab_reach(self.c_roundness) + self.c_roundness + 1
    }

    fn lengths(&self) -> [(&'static str, i32); 14] {
        [
            ("min_block_height", self.min_block_height),
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
            ("gap", self.gap),
            ("block_roundness", self.block_roundness),
            ("reporter_roundness", self.reporter_roundness),
            ("boolean_roundness", self.boolean_roundness),
            ("literal_roundness", self.literal_roundness),
            ("c_roundness", self.c_roundness),
            ("c_width", self.c_width),
            ("c_min_height", self.c_min_height),
            ("tab_padding", self.tab_padding),
            ("tab_width", self.tab_width),
            ("tab_height", self.tab_height),
        ]
    }
}

fn from_env_with<F>(mut get: F) -> LayoutConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = LayoutConfig::default();
    let mut errors = Vec::new();

    {
        let mut int = |key: &str, field: &'static str, slot: &mut i32| {
            if let Some(value) = get(key) {
                match value.trim().parse::<i32>() {
                    Ok(parsed) => *slot = parsed,
                    Err(_) => errors.push(LayoutConfigError::new(field, value, "expected integer")),
                }
            }
        };
        int(ENV_MIN_BLOCK_HEIGHT, "min_block_height", &mut config.min_block_height);
        int(ENV_PADDING_X, "padding_x", &mut config.padding_x);
        int(ENV_PADDING_Y, "padding_y", &mut config.padding_y);
        int(ENV_GAP, "gap", &mut config.gap);
        int(ENV_BLOCK_ROUNDNESS, "block_roundness", &mut config.block_roundness);
        int(ENV_REPORTER_ROUNDNESS, "reporter_roundness", &mut config.reporter_roundness);
        int(ENV_BOOLEAN_ROUNDNESS, "boolean_roundness", &mut config.boolean_roundness);
        int(ENV_LITERAL_ROUNDNESS, "literal_roundness", &mut config.literal_roundness);
        int(ENV_C_ROUNDNESS, "c_roundness", &mut config.c_roundness);
        int(ENV_C_WIDTH, "c_width", &mut config.c_width);
        int(ENV_C_MIN_HEIGHT, "c_min_height", &mut config.c_min_height);
        int(ENV_TAB_PADDING, "tab_padding", &mut config.tab_padding);
        int(ENV_TAB_WIDTH, "tab_width", &mut config.tab_width);
        int(ENV_TAB_HEIGHT, "tab_height", &mut config.tab_height);
    }

    if let Some(value) = get(ENV_LITERAL_BACKGROUND) {
        match parse_color(&value) {
            Ok(parsed) => config.literal_background = parsed,
            Err(message) => errors.push(LayoutConfigError::new(
                "literal_background",
                value,
                message,
            )),
        }
    }

    if let Some(value) = get(ENV_LITERAL_FOREGROUND) {
        match parse_color(&value) {
            Ok(parsed) => config.literal_foreground = parsed,
            Err(message) => errors.push(LayoutConfigError::new(
                "literal_foreground",
                value,
                message,
            )),
        }
    }

    if !errors.is_empty() {
        blockimg_core::warn!(
            count = errors.len(),
            fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            "ignoring invalid layout settings"
        );
    }

    LayoutConfigParse { config, errors }
}

fn parse_color(value: &str) -> Result<Option<Rgb>, String> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Rgb::parse(value).map(Some).map_err(|err| err.message.to_string())
}

fn validate_non_negative(field: &'static str, value: i32, errors: &mut Vec<LayoutConfigError>) {
    if value < 0 {
        errors.push(LayoutConfigError::new(
            field,
            value.to_string(),
            "must be >= 0",
        ));
    }
}
