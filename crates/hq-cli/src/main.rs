//! CLI frontend for the horoscope quiz.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hq_core::ContentSource;

#[derive(Parser)]
#[command(
    name = "hq",
    about = "Horoscope quiz: answer a few questions, get your stars read",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a content document to a new file to start editing from
    Init {
        /// Path of the JSON file to create
        path: PathBuf,

        /// Content to copy: a JSON file path, an http(s) URL, or "embedded"
        #[arg(long, default_value = "embedded")]
        from: ContentSource,
    },

    /// Load a content document and report what it contains
    Check {
        /// Content document: a JSON file path, an http(s) URL, or "embedded"
        #[arg(short, long, default_value = "embedded")]
        content: ContentSource,
    },

    /// Print the answer hash for a sequence of fragments
    Hash {
        /// Answer fragments in order
        fragments: Vec<String>,

        /// Number of start blocks to select from
        #[arg(long)]
        start: Option<usize>,

        /// Number of end blocks to select from
        #[arg(long)]
        end: Option<usize>,
    },

    /// Answer the quiz by option number and print the horoscope
    Compose {
        /// Option number (1-based) for each question, in order
        #[arg(short, long = "answer", required = true, num_args = 1..)]
        answers: Vec<usize>,

        /// Print only the horoscope text
        #[arg(long)]
        plain: bool,

        /// Content document: a JSON file path, an http(s) URL, or "embedded"
        #[arg(short, long, default_value = "embedded")]
        content: ContentSource,

        /// RNG seed for zodiac/ascendant draws (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play the quiz interactively on the command line
    Play {
        /// Content document: a JSON file path, an http(s) URL, or "embedded"
        #[arg(short, long, default_value = "embedded")]
        content: ContentSource,

        /// RNG seed for zodiac/ascendant draws (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the terminal UI
    Tui {
        /// Content document: a JSON file path, an http(s) URL, or "embedded"
        #[arg(short, long, default_value = "embedded")]
        content: ContentSource,

        /// RNG seed for zodiac/ascendant draws (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path, from } => commands::init::run(&path, &from),
        Commands::Check { content } => commands::check::run(&content),
        Commands::Hash {
            fragments,
            start,
            end,
        } => commands::hash::run(&fragments, start, end),
        Commands::Compose {
            answers,
            plain,
            content,
            seed,
        } => commands::compose::run(&content, seed, &answers, plain),
        Commands::Play { content, seed } => commands::play::run(&content, seed),
        Commands::Tui { content, seed } => commands::tui::run(&content, seed),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
