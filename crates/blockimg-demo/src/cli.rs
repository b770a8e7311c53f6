#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `BLOCKIMG_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

use blockimg::{DEFAULT_FONT_SIZE, Rgb};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
blockimg demo: render the reference block script to a PNG

USAGE:
    blockimg-demo [OPTIONS]

OPTIONS:
    --output=PATH        Where to write the PNG (default: output.png)
    --margin=N           Background border around the script, in pixels (default: 10)
    --theme=PATH         Theme table overriding the built-in categories
    --background=COLOR   Canvas color, #rrggbb or a name (default: #d3d3d3)
    --font=PATH          TrueType/OpenType font for labels (default: built-in bitmap font)
    --font-size=PX       Pixel size for --font (default: 12)
    --help, -h           Show this help message
    --version, -V        Show version

THEME TABLE:
    One category per line: CATEGORY FOREGROUND HIGHLIGHT BACKGROUND SHADOW OUTLINE.
    Colors are #rrggbb or `none`. Lines starting with # are ignored.

ENVIRONMENT VARIABLES:
    BLOCKIMG_DEMO_OUTPUT       Override --output
    BLOCKIMG_DEMO_MARGIN       Override --margin
    BLOCKIMG_DEMO_THEME        Override --theme
    BLOCKIMG_DEMO_BACKGROUND   Override --background
    BLOCKIMG_DEMO_FONT         Override --font
    BLOCKIMG_DEMO_FONT_SIZE    Override --font-size
    BLOCKIMG_*                 Layout constants (e.g. BLOCKIMG_PADDING_X=8)
    RUST_LOG                   Log filter (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// PNG destination.
    pub output: PathBuf,
    /// Border around the script, in pixels.
    pub margin: i32,
    /// Optional theme table file.
    pub theme: Option<PathBuf>,
    /// Canvas background.
    pub background: Rgb,
    /// Outline font file; the bitmap font is used without one.
    pub font: Option<PathBuf>,
    /// Pixel size for `font`.
    pub font_size: f32,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.png"),
            margin: 10,
            theme: None,
            background: Rgb::new(0xd3, 0xd3, 0xd3),
            font: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version`, or bad input.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("blockimg-demo {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse_from<I, F>(args: I, get_env: F) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("BLOCKIMG_DEMO_OUTPUT") {
            opts.output = PathBuf::from(val);
        }
        if let Some(val) = get_env("BLOCKIMG_DEMO_MARGIN")
            && let Ok(n) = val.trim().parse()
        {
            opts.margin = n;
        }
        if let Some(val) = get_env("BLOCKIMG_DEMO_THEME") {
            opts.theme = Some(PathBuf::from(val));
        }
        if let Some(val) = get_env("BLOCKIMG_DEMO_BACKGROUND")
            && let Ok(color) = Rgb::parse(&val)
        {
            opts.background = color;
        }
        if let Some(val) = get_env("BLOCKIMG_DEMO_FONT") {
            opts.font = Some(PathBuf::from(val));
        }
        if let Some(val) = get_env("BLOCKIMG_DEMO_FONT_SIZE")
            && let Some(px) = parse_font_size(&val)
        {
            opts.font_size = px;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--output=") {
                        opts.output = PathBuf::from(val);
                    } else if let Some(val) = other.strip_prefix("--margin=") {
                        match val.parse::<i32>() {
                            Ok(n) if n >= 0 => opts.margin = n,
                            _ => return Err(format!("Invalid --margin value: {val}")),
                        }
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--background=") {
                        opts.background = Rgb::parse(val)
                            .map_err(|err| format!("Invalid --background value: {err}"))?;
                    } else if let Some(val) = other.strip_prefix("--font=") {
                        opts.font = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--font-size=") {
                        opts.font_size = parse_font_size(val)
                            .ok_or_else(|| format!("Invalid --font-size value: {val}"))?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

fn parse_font_size(val: &str) -> Option<f32> {
    val.trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite() && *px > 0.0)
}
