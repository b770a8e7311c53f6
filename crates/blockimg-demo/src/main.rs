#![forbid(unsafe_code)]

//! blockimg demo binary.
//!
//! Builds the reference script, renders it to a canvas cropped to the
//! script plus a margin, and writes a PNG.

mod cli;
mod sample;

use std::fs;
use std::process;

use blockimg::{LayoutConfig, OutlineFont, Theme, render_with_font};
use tracing_subscriber::EnvFilter;

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    if let Err(err) = run(&opts) {
        tracing::error!(%err, "render failed");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layout constants from `BLOCKIMG_*`, with every problem logged.
fn layout_config() -> LayoutConfig {
    let parsed = LayoutConfig::from_env_with_diagnostics();
    for err in &parsed.errors {
        tracing::warn!(%err, "ignoring layout override");
    }
    if let Err(errors) = parsed.config.validate() {
        for err in errors {
            tracing::warn!(%err, "layout constant out of range; rendering anyway");
        }
    }
    parsed.config
}

/// Built-in categories, overridden by the `--theme` table when given.
fn load_theme(opts: &cli::Opts) -> blockimg::Result<Theme> {
    let mut theme = Theme::default();
    if let Some(path) = &opts.theme {
        let text = fs::read_to_string(path)?;
        let custom = Theme::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            categories = custom.len(),
            "theme loaded"
        );
        theme.extend(&custom);
    }
    Ok(theme)
}

/// The `--font` file at `--font-size`, or `None` for the bitmap font.
fn load_font(opts: &cli::Opts) -> blockimg::Result<Option<OutlineFont>> {
    let Some(path) = &opts.font else {
        return Ok(None);
    };
    let font = OutlineFont::load(path, opts.font_size)?;
    tracing::info!(
        path = %path.display(),
        name = font.name().unwrap_or("unnamed"),
        px = font.size(),
        "font loaded"
    );
    Ok(Some(font))
}

fn run(opts: &cli::Opts) -> blockimg::Result<()> {
    let config = layout_config();
    let theme = load_theme(opts)?;
    let font = load_font(opts)?;
    let script = sample::script(&theme)?;

    let canvas = render_with_font(
        &script,
        &config,
        opts.margin,
        opts.background,
        font.as_ref(),
    )?;
    canvas.save_png(&opts.output)?;
    tracing::info!(
        path = %opts.output.display(),
        width = canvas.width(),
        height = canvas.height(),
        "diagram written"
    );
    Ok(())
}
