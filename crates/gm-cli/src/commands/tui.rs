//! Launch the gm-tui full-screen binary.

use std::path::Path;

pub fn run(words: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let mut cmd = std::process::Command::new("gm-tui");
    if let Some(words) = words {
        cmd.arg("--words").arg(words);
    }
    if let Some(seed) = seed {
        cmd.arg("--seed").arg(seed.to_string());
    }

    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("gm-tui exited with {s}")),
        Err(_) => {
            Err("gm-tui binary not found. Install with: cargo install --path crates/gm-tui".into())
        }
    }
}
