//! RGB colors and hex/named color parsing.

use std::fmt;
use std::str::FromStr;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or one of a handful of color names.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if let Some(named) = named_color(trimmed) {
            return Ok(named);
        }
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(input, "expected hex digits or a color name"));
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                match (channel(0), channel(2), channel(4)) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
                    _ => Err(ColorParseError::new(input, "invalid hex channel")),
                }
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    // `is_ascii_hexdigit` was checked above.
                    let value = digit.to_digit(16).unwrap_or(0) as u8;
                    *slot = value * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(ColorParseError::new(input, "expected 3 or 6 hex digits")),
        }
    }

    /// Pack into a `u32` as `0x00RRGGBB`.
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Paint `over` on top of `self` with `alpha` coverage (255 is opaque).
    #[must_use]
    pub const fn blend(self, over: Rgb, alpha: u8) -> Rgb {
        const fn mix(under: u8, over: u8, alpha: u8) -> u8 {
            let a = alpha as u32;
            ((under as u32 * (255 - a) + over as u32 * a + 127) / 255) as u8
        }
        Rgb::new(
            mix(self.r, over.r, alpha),
            mix(self.g, over.g, alpha),
            mix(self.b, over.b, alpha),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => Rgb::BLACK,
        "white" => Rgb::WHITE,
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "blue" => Rgb::new(0, 0, 255),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "lightgray" | "lightgrey" => Rgb::new(211, 211, 211),
        "darkgray" | "darkgrey" => Rgb::new(169, 169, 169),
        _ => return None,
    };
    Some(rgb)
}

/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
    pub message: &'static str,
}

impl ColorParseError {
    fn new(input: &str, message: &'static str) -> Self {
        Self {
            input: input.to_string(),
            message,
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}
