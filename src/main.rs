//! Binary entrypoint: a text-mode carousel driven from stdin.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use slide_carousel::config::CarouselConfig;
use slide_carousel::render::TextSurface;
use slide_carousel::tasks;
use slide_carousel::{Carousel, CarouselEvent};

#[derive(Debug, Parser)]
#[command(
    name = "carousel",
    version,
    about = "Text-mode image carousel (p = previous, n = next, t = toggle rotation, q = quit)"
)]
struct Cli {
    /// Path to YAML config; built-in defaults when omitted
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the rotation interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Start rotating immediately
    #[arg(long)]
    auto_rotation: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Raise both the library and the binary targets to the level picked by `-v`.
fn log_filter(mut filter: EnvFilter, verbosity: u8) -> Result<EnvFilter> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // library and binary log under different targets
    for target in ["slide_carousel", "carousel"] {
        filter = filter.add_directive(
            format!("{target}={level}")
                .parse()
                .context("building log filter")?,
        );
    }
    Ok(filter)
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let filter = log_filter(base, verbosity)?;
    // stdout belongs to the render surface
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<CarouselConfig> {
    let mut cfg = match &cli.config {
        Some(path) => CarouselConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(ms) = cli.interval_ms {
        cfg.time_interval = Duration::from_millis(ms);
    }
    if cli.auto_rotation {
        cfg.auto_rotation = true;
    }
    cfg.validated().context("invalid configuration values")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = load_config(&cli)?;
    info!(
        slides = cfg.slides.len(),
        auto_rotation = cfg.auto_rotation,
        interval = %humantime::format_duration(cfg.time_interval),
        "configuration loaded"
    );

    let (events_tx, events_rx) = mpsc::channel::<CarouselEvent>(16); // Input + timer -> Carousel
    let carousel: Carousel<TextSurface<io::Stdout>> =
        Carousel::new(cfg.options()?, events_tx.downgrade())?;
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut tasks = JoinSet::new();

    // Stdin is read on its own thread so shutdown never waits for a keypress.
    let (lines_tx, lines_rx) = mpsc::channel::<String>(16); // Stdin thread -> Input
    tasks::input::spawn_line_reader(io::BufReader::new(io::stdin()), lines_tx)
        .context("failed to start stdin reader")?;

    tasks.spawn({
        let cancel = cancel.clone();
        async move {
            tasks::input::run(lines_rx, events_tx, cancel)
                .await
                .context("input task failed")
        }
    });

    tasks.spawn({
        let cancel = cancel.clone();
        let surface = TextSurface::new(io::stdout());
        async move {
            tasks::carousel::run(carousel, surface, events_rx, cancel)
                .await
                .context("carousel task failed")
        }
    });

    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                cancel.cancel();
                return Err(err);
            }
            Err(join_err) => {
                cancel.cancel();
                return Err(join_err).context("task panicked");
            }
        }
    }
    Ok(())
}
