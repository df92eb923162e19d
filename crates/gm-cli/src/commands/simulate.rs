//! Batch simulation with an automated guesser.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use gm_core::{GameConfig, GameSession, Winner};

/// Letters in descending English frequency order; the automated guesser
/// tries them in this order until the round ends.
const FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Aggregate statistics over a batch of rounds.
#[derive(Serialize)]
struct SimStats {
    rounds: usize,
    wins: usize,
    losses: usize,
    win_rate: f64,
    avg_wrong_guesses: f64,
    categories: BTreeMap<String, CategoryStats>,
    lost_words: Vec<String>,
}

/// Per-category round and win counts.
#[derive(Serialize, Default)]
struct CategoryStats {
    rounds: usize,
    wins: usize,
}

pub fn run(
    path: Option<&Path>,
    rounds: usize,
    seed: u64,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let words = super::load_words(path)?;
    let mut session = GameSession::new(words, GameConfig::default().with_seed(seed));

    for i in 0..rounds {
        session.start_round().map_err(|e| e.to_string())?;
        // The guesser covers the whole alphabet, so every round terminates:
        // either the word is revealed or six misses accumulate first.
        for ch in FREQUENCY_ORDER.chars() {
            let outcome = session.guess(ch).map_err(|e| e.to_string())?;
            if outcome.is_over() {
                break;
            }
        }
        if verbose
            && !json
            && let Some(record) = session.history().last()
        {
            println!(
                "  round {:>3}: {}/{} {} ({} wrong)",
                i + 1,
                record.category,
                record.word,
                record.winner,
                record.wrong_guesses
            );
        }
        session.reset_to_lobby();
    }

    let stats = collect_stats(&session);

    if json {
        let out = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if verbose {
        println!();
    }
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({rounds} rounds, seed={seed})").dimmed()
    );
    println!();
    println!("  Wins:   {}", stats.wins.to_string().green());
    println!("  Losses: {}", stats.losses.to_string().red());
    println!("  Win rate: {:.1}%", stats.win_rate * 100.0);
    println!("  Avg wrong guesses: {:.2}", stats.avg_wrong_guesses);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Rounds", "Wins", "Win rate"]);
    for (name, cat) in &stats.categories {
        let rate = if cat.rounds == 0 {
            0.0
        } else {
            cat.wins as f64 / cat.rounds as f64 * 100.0
        };
        table.add_row(vec![
            name.clone(),
            cat.rounds.to_string(),
            cat.wins.to_string(),
            format!("{rate:.1}%"),
        ]);
    }
    println!("{table}");

    if !stats.lost_words.is_empty() {
        println!();
        println!("  Lost words: {}", stats.lost_words.join(", ").red());
    }

    Ok(())
}

/// Fold the session history into aggregate statistics.
fn collect_stats(session: &GameSession) -> SimStats {
    let history = session.history();
    let wins = history
        .iter()
        .filter(|r| r.winner == Winner::Player)
        .count();
    let losses = history.len() - wins;
    let total_wrong: u32 = history.iter().map(|r| r.wrong_guesses).sum();

    let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for record in history {
        let entry = categories.entry(record.category.clone()).or_default();
        entry.rounds += 1;
        if record.winner == Winner::Player {
            entry.wins += 1;
        }
    }

    let lost_words: Vec<String> = history
        .iter()
        .filter(|r| r.winner == Winner::Opponent)
        .map(|r| r.word.clone())
        .collect();

    let rounds = history.len();
    SimStats {
        rounds,
        wins,
        losses,
        win_rate: if rounds == 0 {
            0.0
        } else {
            wins as f64 / rounds as f64
        },
        avg_wrong_guesses: if rounds == 0 {
            0.0
        } else {
            f64::from(total_wrong) / rounds as f64
        },
        categories,
        lost_words,
    }
}
