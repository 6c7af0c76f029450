// File: crates/demo/src/main.rs
// Summary: Renders the Barcelona wave week to an HTML page, SVG or PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use swell_chart_core::{theme, OutputFormat, RenderOptions, WaveChart};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Svg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Html => OutputFormat::Html,
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Wave height chart for a week of Barcelona observations.
#[derive(Parser, Debug)]
#[command(name = "swell")]
#[command(about = "Render the Barcelona wave chart")]
#[command(version)]
struct Args {
    /// Output kind.
    #[arg(short, long, value_enum, default_value = "html")]
    format: Format,

    /// Output path (default: target/out/barcelona_week.<ext>).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Path to render options (JSON5 format).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset (overrides config): light, dark, high-contrast-dark.
    #[arg(long)]
    theme: Option<String>,

    /// Omit axis tick labels.
    #[arg(long)]
    no_labels: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level, args.log_format)?;

    let mut opts = match &args.config {
        Some(path) => swell_chart_core::load_options(path)
            .with_context(|| format!("loading render options from '{}'", path.display()))?,
        None => RenderOptions::default(),
    };
    if let Some(name) = &args.theme {
        opts.theme = theme::find(name).with_context(|| {
            let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
            format!("unknown theme '{}' (known: {})", name, known.join(", "))
        })?;
    }
    if args.no_labels {
        opts.draw_labels = false;
    }
    opts.validate()?;
    debug!(?opts, "render options");

    let chart = WaveChart::barcelona_week().context("built-in dataset failed validation")?;
    info!(observations = chart.observations().len(), "loaded dataset");

    let format = OutputFormat::from(args.format);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("target/out/barcelona_week.{}", format.extension())));
    chart
        .render_to_file(&opts, format, &out)
        .with_context(|| format!("rendering chart to '{}'", out.display()))?;

    println!("Wrote {}", out.display());
    Ok(())
}

fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
    }
    Ok(())
}
