//! CLI frontend for the Galgenmann hangman engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gm",
    about = "Galgenmann — hangman in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round in line mode on stdin/stdout
    Play {
        /// JSON word file mapping categories to word arrays
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// RNG seed for word draws and lobby rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the full-screen TUI
    Tui {
        /// JSON word file mapping categories to word arrays
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// RNG seed for word draws and lobby rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the word table
    Words {
        /// JSON word file mapping categories to word arrays
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Show a single category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Print a starter word file to stdout
        #[arg(long)]
        template: bool,
    },

    /// Play many rounds with an automated guesser and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: usize,

        /// RNG seed for deterministic runs
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON word file mapping categories to word arrays
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Print one line per round
        #[arg(short, long)]
        verbose: bool,

        /// Emit machine-readable JSON statistics
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { words, seed } => commands::play::run(words.as_deref(), seed),
        Commands::Tui { words, seed } => commands::tui::run(words.as_deref(), seed),
        Commands::Words {
            words,
            category,
            template,
        } => commands::words::run(words.as_deref(), category.as_deref(), template),
        Commands::Simulate {
            rounds,
            seed,
            words,
            verbose,
            json,
        } => commands::simulate::run(words.as_deref(), rounds, seed, verbose, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
