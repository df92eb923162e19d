//! Integration tests for the gm-cli binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a word file with a single one-word category, so scripted play is
/// fully predictable regardless of the seed.
fn single_word_file(dir: &TempDir, word: &str) -> PathBuf {
    let path = dir.path().join("words.json");
    fs::write(&path, format!(r#"{{"test": ["{word}"]}}"#)).unwrap();
    path
}

fn gm() -> Command {
    Command::cargo_bin("gm").unwrap()
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    gm().arg("--help").assert().success().stdout(
        predicate::str::contains("play")
            .and(predicate::str::contains("tui"))
            .and(predicate::str::contains("words"))
            .and(predicate::str::contains("simulate")),
    );
}

// ---------------------------------------------------------------------------
// words
// ---------------------------------------------------------------------------

#[test]
fn words_lists_builtin_categories() {
    gm().arg("words").assert().success().stdout(
        predicate::str::contains("crypto")
            .and(predicate::str::contains("tech"))
            .and(predicate::str::contains("BITCOIN"))
            .and(predicate::str::contains("ROUTER"))
            .and(predicate::str::contains("2 categories, 12 words")),
    );
}

#[test]
fn words_filters_by_category() {
    gm().args(["words", "--category", "tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ROUTER").and(predicate::str::contains("BITCOIN").not()));
}

#[test]
fn words_category_is_case_insensitive() {
    gm().args(["words", "--category", "CRYPTO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BLOCKCHAIN"));
}

#[test]
fn words_unknown_category_suggests_nearest() {
    gm().args(["words", "--category", "tec"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'tech'"));
}

#[test]
fn words_template_is_valid_json() {
    let output = gm()
        .args(["words", "--template"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.get("crypto").is_some());
    assert!(parsed.get("tech").is_some());
}

#[test]
fn words_reads_custom_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"{"animals": ["cat", "dog"]}"#).unwrap();

    gm().args(["words", "--words", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("animals").and(predicate::str::contains("CAT")));
}

#[test]
fn empty_category_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"{"void": []}"#).unwrap();

    gm().args(["words", "--words", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no words"));
}

#[test]
fn non_letter_word_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"{"bad": ["gas station"]}"#).unwrap();

    gm().args(["words", "--words", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid word"));
}

#[test]
fn missing_word_file_is_fatal() {
    gm().args(["words", "--words", "/no/such/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_reports_stats() {
    gm().args(["simulate", "--rounds", "20", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("20 rounds")
                .and(predicate::str::contains("Win rate"))
                .and(predicate::str::contains("Avg wrong guesses")),
        );
}

#[test]
fn simulate_is_deterministic() {
    let a = gm()
        .args(["simulate", "--rounds", "10", "--seed", "3"])
        .output()
        .unwrap();
    let b = gm()
        .args(["simulate", "--rounds", "10", "--seed", "3"])
        .output()
        .unwrap();
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn simulate_json_is_machine_readable() {
    let output = gm()
        .args(["simulate", "--rounds", "5", "--seed", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["rounds"], 5);
    let wins = stats["wins"].as_u64().unwrap();
    let losses = stats["losses"].as_u64().unwrap();
    assert_eq!(wins + losses, 5);
}

#[test]
fn simulate_verbose_prints_each_round() {
    gm().args(["simulate", "--rounds", "3", "--seed", "2", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("round   1:").and(predicate::str::contains("round   3:")));
}

#[test]
fn simulate_with_custom_words() {
    let dir = TempDir::new().unwrap();
    let path = single_word_file(&dir, "etaoin");

    // Every letter of "etaoin" leads the frequency order, so every round wins.
    let output = gm()
        .args([
            "simulate",
            "--rounds",
            "4",
            "--words",
            path.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["wins"], 4);
    assert_eq!(stats["categories"]["test"]["rounds"], 4);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_from_the_lobby() {
    gm().arg("play")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room"));
}

#[test]
fn play_win_round() {
    let dir = TempDir::new().unwrap();
    let path = single_word_file(&dir, "gas");

    gm().args(["play", "--words", path.to_str().unwrap(), "--seed", "1"])
        .write_stdin("\ng\na\ns\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CATEGORY: TEST")
                .and(predicate::str::contains("G A S"))
                .and(predicate::str::contains("WINNER: You")),
        );
}

#[test]
fn play_lose_round_reveals_the_word() {
    let dir = TempDir::new().unwrap();
    let path = single_word_file(&dir, "gas");

    gm().args(["play", "--words", path.to_str().unwrap(), "--seed", "1"])
        .write_stdin("\nz\nx\nq\nw\ne\nr\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("WINNER: Computer")
                .and(predicate::str::contains("G A S"))
                .and(predicate::str::contains("Wrong: 6/6")),
        );
}

#[test]
fn play_repeat_guess_is_flagged() {
    let dir = TempDir::new().unwrap();
    let path = single_word_file(&dir, "gas");

    gm().args(["play", "--words", path.to_str().unwrap(), "--seed", "1"])
        .write_stdin("\ng\ng\na\ns\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("already guessed")
                .and(predicate::str::contains("WINNER: You"))
                .and(predicate::str::contains("Wrong: 0/6")),
        );
}

#[test]
fn play_again_starts_a_new_round() {
    let dir = TempDir::new().unwrap();
    let path = single_word_file(&dir, "gas");

    let output = gm()
        .args(["play", "--words", path.to_str().unwrap(), "--seed", "1"])
        .write_stdin("\ng\na\ns\ny\n\ng\na\ns\nn\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("WINNER: You").count(), 2);
}

#[test]
fn play_eof_exits_cleanly() {
    gm().arg("play").write_stdin("").assert().success();
}

#[test]
fn play_bad_word_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, "{}").unwrap();

    gm().args(["play", "--words", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no categories"));
}
