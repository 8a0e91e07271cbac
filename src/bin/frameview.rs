use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use frameview::{
    DisplayConfig, DisplayEvent, DoubleBufferedDisplay, FileImageSource, FileImageSourceOpts,
    FrameRef, LogObserver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "frameview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrub through frames as fast as possible and report what ends up on screen.
    Scrub(ScrubArgs),
    /// Load each frame in turn and report which ones fail.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Decode worker threads.
    #[arg(long, default_value_t = 2)]
    threads: usize,

    /// Give up waiting for a frame after this many milliseconds.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Display config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pause between requests, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    #[command(flatten)]
    source: SourceArgs,

    /// Frame files, in scrub order.
    #[arg(required = true)]
    frames: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame files to check.
    #[arg(required = true)]
    frames: Vec<PathBuf>,
}

type FileDisplay = DoubleBufferedDisplay<FileImageSource>;

enum Outcome {
    Shown,
    Failed(String),
    TimedOut,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scrub(args) => cmd_scrub(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn open_display(
    args: &SourceArgs,
    config: DisplayConfig,
    label: &str,
) -> anyhow::Result<FileDisplay> {
    let source = FileImageSource::new(FileImageSourceOpts {
        threads: args.threads,
    })?;
    let mut display = DoubleBufferedDisplay::new(source, config);
    display.add_observer(LogObserver::new(label));
    Ok(display)
}

/// Apply notifications until the last request is on screen, fails, or `timeout` elapses.
fn settle(display: &mut FileDisplay, timeout: Duration) -> Outcome {
    let deadline = Instant::now() + timeout;
    loop {
        if display.current_source() == display.requested_source() {
            return Outcome::Shown;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Outcome::TimedOut;
        }
        let Some(change) = display.image_source().recv_timeout(remaining) else {
            return Outcome::TimedOut;
        };
        if let Some(DisplayEvent::ImageError { source, reason, .. }) = display.handle_status(change)
            && &source == display.requested_source()
        {
            return Outcome::Failed(reason);
        }
    }
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => DisplayConfig::from_path(path)?,
        None => DisplayConfig::default(),
    };
    let mut display = open_display(&args.source, config, "scrub")?;

    let started = Instant::now();
    let mut swaps = 0usize;
    for frame in &args.frames {
        display.request_frame(FrameRef::from_path(frame));
        swaps += display.pump().iter().filter(|e| !e.is_error()).count();
        if let Some(text) = display.loading_text() {
            tracing::debug!("{text}");
        }
        if args.delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    let outcome = settle(&mut display, Duration::from_millis(args.source.timeout_ms));
    eprintln!(
        "requested {} frames, {swaps} swaps while scrubbing, settled in {:?}",
        args.frames.len(),
        started.elapsed()
    );

    match outcome {
        Outcome::Shown => {
            let size = display
                .current_image()
                .map(|img| format!("{}x{}", img.width, img.height))
                .unwrap_or_default();
            println!("{} {size}", display.current_source());
            Ok(())
        }
        Outcome::Failed(reason) => {
            anyhow::bail!("last frame '{}' failed: {reason}", display.requested_source())
        }
        Outcome::TimedOut => anyhow::bail!(
            "timed out waiting for '{}' (showing '{}')",
            display.requested_source(),
            display.current_source()
        ),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let mut display = open_display(&args.source, DisplayConfig::default(), "check")?;
    let timeout = Duration::from_millis(args.source.timeout_ms);

    let mut failed = 0usize;
    for frame in &args.frames {
        display.request_frame(FrameRef::from_path(frame));
        match settle(&mut display, timeout) {
            Outcome::Shown => println!("ok      {}", frame.display()),
            Outcome::Failed(reason) => {
                failed += 1;
                println!("failed  {}: {reason}", frame.display());
            }
            Outcome::TimedOut => {
                failed += 1;
                println!("timeout {}", frame.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} frames failed to load", args.frames.len());
    }
    Ok(())
}
