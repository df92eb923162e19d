//! Line-mode play loop on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use gm_core::{
    GameConfig, GameSession, GuessResult, MAX_WRONG_GUESSES, Phase, Round, RoomStatus, Winner,
    stage,
};

pub fn run(path: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let words = super::load_words(path)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut session = GameSession::new(words, GameConfig::default().with_seed(seed));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print_lobby(&session);
        print!("Press Enter to join an open room (q to quit): ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()), // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }

        session.start_round().map_err(|e| e.to_string())?;
        play_round(&mut session, &mut reader)?;

        if session.phase() != Phase::RoundOver {
            // EOF mid-round
            return Ok(());
        }

        print!("Play again? [y/N]: ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        if !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        session.reset_to_lobby();
    }
}

/// Run the prompt loop for the active round until it ends or stdin closes.
fn play_round(session: &mut GameSession, reader: &mut impl BufRead) -> Result<(), String> {
    let mut line = String::new();
    loop {
        if let Some(round) = session.round() {
            print_board(round);
        }

        print!("guess> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()), // EOF abandons the round
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        let Some(ch) = line.trim().chars().next() else {
            continue;
        };

        let outcome = session.guess(ch).map_err(|e| e.to_string())?;
        let upper = ch.to_ascii_uppercase();
        match outcome.result {
            GuessResult::Hit => println!("  '{upper}' {}", "is in the word!".green()),
            GuessResult::Miss => println!("  '{upper}' {}", "is not in the word.".red()),
            GuessResult::Ignored => {
                println!("  {}", "already guessed (or not a letter)".dimmed());
            }
        }

        if outcome.is_over() {
            if let Some(round) = session.round() {
                print_board(round);
            }
            if let Some(winner) = outcome.winner {
                let banner = format!("WINNER: {winner}");
                match winner {
                    Winner::Player => println!("  {}", banner.green().bold()),
                    Winner::Opponent => println!("  {}", banner.red().bold()),
                }
            }
            println!();
            return Ok(());
        }
    }
}

/// Print the room list and recent results.
fn print_lobby(session: &GameSession) {
    println!();
    println!("  {}", "Rooms".bold().underline());
    for room in session.lobby().rooms() {
        let status = match room.status {
            RoomStatus::Open => "Open".green().bold(),
            RoomStatus::InGame => "In Game".yellow(),
            RoomStatus::Full => "Full".red(),
        };
        println!("  Room {}  [{status}]", room.number);
    }

    if !session.history().is_empty() {
        println!();
        println!("  {}", "Recent rounds".bold().underline());
        for record in session.history().iter().rev().take(5) {
            println!(
                "  {}  {}/{} ({} wrong)",
                record.winner, record.category, record.word, record.wrong_guesses
            );
        }
    }
    println!();
}

/// Print the gallows, category, reveal pattern, and guess bookkeeping.
fn print_board(round: &Round) {
    println!();
    println!("{}", stage::drawing(round.wrong_guesses()));
    println!();
    println!("  CATEGORY: {}", round.category().to_uppercase());
    println!("  {}", round.reveal().to_string().bold());
    let guessed: Vec<String> = round.guessed().iter().map(|l| l.to_string()).collect();
    if !guessed.is_empty() {
        println!("  Guessed: {}", guessed.join(" "));
    }
    println!("  Wrong: {}/{MAX_WRONG_GUESSES}", round.wrong_guesses());
    println!();
}
