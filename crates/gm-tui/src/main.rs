//! Standalone TUI binary for Galgenmann.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gm_core::{GameConfig, GameSession, WordList};

#[derive(Parser)]
#[command(name = "gm-tui", about = "Full-screen terminal hangman", version)]
struct Args {
    /// JSON word file mapping categories to word arrays (default: built-in table)
    #[arg(long)]
    words: Option<PathBuf>,

    /// RNG seed for word draws and lobby rolls (default: random)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let words = match &args.words {
        Some(path) => match WordList::from_file(path) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => WordList::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let session = GameSession::new(words, GameConfig::default().with_seed(seed));
    let app = gm_tui::app::TuiApp::new(session);

    if let Err(e) = gm_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
