//! Standalone TUI binary for the horoscope quiz.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hq_core::{ContentSource, QuizConfig};

#[derive(Parser)]
#[command(name = "hq-tui", about = "Terminal UI for the horoscope quiz", version)]
struct Args {
    /// Content document: a JSON file path, an http(s) URL, or "embedded"
    #[arg(long, default_value = "embedded")]
    content: ContentSource,

    /// RNG seed for zodiac/ascendant draws (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Screen to open on (/, /wizard, /result)
    #[arg(long, default_value = "/")]
    screen: String,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = QuizConfig::default().with_source(args.content);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut app = hq_tui::app::TuiApp::new(config);
    app.open(&args.screen);

    if let Err(e) = hq_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send tracing output to `path`, filtered by `RUST_LOG` (default `info`).
fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open log file: {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
