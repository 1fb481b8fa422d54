//! cartesian-plot - render slope-intercept lines to PNG or SVG.
//!
//! ```text
//! cartesian-plot --line 1,0 --line -0.5,2 --output plot.png
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cartesian_plot::config::PlotConfig;
use cartesian_plot::output::{PngEncoder, SvgSink};
use cartesian_plot::render::RasterSink;
use cartesian_plot::session::PlotSession;
use cartesian_plot::surface::{PlotSurface, RenderSink};

/// Render lines y = m·x + b on a Cartesian grid
#[derive(Parser, Debug)]
#[command(name = "cartesian-plot")]
#[command(version)]
#[command(about = "Render slope-intercept lines on a Cartesian grid", long_about = None)]
struct Cli {
    /// Viewport width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Line as SLOPE,INTERCEPT; repeat to overlay lines
    #[arg(short, long = "line", value_name = "M,B", allow_hyphen_values = true)]
    lines: Vec<String>,

    /// Keep only the last line instead of overlaying
    #[arg(long)]
    single: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (.png or .svg)
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Png,
    Svg,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => bail!("unsupported output format: {} (expected .png or .svg)", path.display()),
        }
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("cartesian-plot/config.yaml"))
        .unwrap_or_default()
}

fn load_config(cli: &Cli) -> Result<PlotConfig> {
    let mut config = match &cli.config {
        Some(path) => PlotConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlotConfig::load_or_default(default_config_path()),
    };
    if let Some(width) = cli.width {
        config.viewport.width = width;
    }
    if let Some(height) = cli.height {
        config.viewport.height = height;
    }
    Ok(config)
}

/// Split `M,B` into its slope and intercept text.
fn split_line(arg: &str) -> Result<(&str, &str)> {
    arg.split_once(',')
        .with_context(|| format!("line {arg:?} is not in SLOPE,INTERCEPT form"))
}

/// Drive a session through the requested lines and return its final surface.
fn plot<S: RenderSink>(cli: &Cli, config: &PlotConfig, sink: S) -> Result<PlotSurface<S>> {
    let mut session = PlotSession::new(PlotSurface::with_theme(sink, config.theme));
    session.ready(config.initial_viewport());

    // With --single only the last line survives, so earlier ones are skipped
    let skip = if cli.single { cli.lines.len().saturating_sub(1) } else { 0 };
    for arg in cli.lines.iter().skip(skip) {
        let (slope, intercept) = split_line(arg)?;
        let drawn = if cli.single {
            session.draw(slope, intercept)
        } else {
            session.draw_line(slope, intercept)
        };
        println!("{}", session.status());
        drawn.with_context(|| format!("line {arg:?}"))?;
    }

    Ok(session.into_surface())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cartesian_plot=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let format = Format::from_path(&cli.output)?;
    let config = load_config(&cli)?;
    let viewport = config.initial_viewport();
    info!(width = viewport.width, height = viewport.height, lines = cli.lines.len(), "plotting");

    match format {
        Format::Png => {
            let sink = RasterSink::from_config(&config).context("allocating framebuffer")?;
            let surface = plot(&cli, &config, sink)?;
            PngEncoder::write_to_file(surface.sink().framebuffer(), &cli.output)?;
        }
        Format::Svg => {
            let sink = SvgSink::new(Some(config.theme.background));
            let surface = plot(&cli, &config, sink)?;
            surface.sink().encoder().write_to_file(&cli.output)?;
        }
    }

    info!(path = %cli.output.display(), "written");
    Ok(())
}
