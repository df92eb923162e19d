//! Category word tables and the random word draw.
//!
//! Two built-in categories ship with the game; custom tables can be loaded
//! from a JSON file mapping category names to word arrays. Words are
//! validated and stored uppercase at construction time, so rounds never have
//! to re-check them.

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use strsim::jaro_winkler;

use crate::error::{GameError, GameResult};

/// Built-in crypto-themed words.
pub const CRYPTO_WORDS: &[&str] = &["bitcoin", "wallet", "solana", "ledger", "gas", "blockchain"];

/// Built-in tech-themed words.
pub const TECH_WORDS: &[&str] = &["router", "debug", "server", "network", "script", "cookie"];

/// Minimum similarity score for category name suggestions (0.0-1.0).
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Raw word file shape: category name -> word array.
pub type WordTable = BTreeMap<String, Vec<String>>;

/// A named category and its words (stored uppercase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<String>,
}

impl Category {
    /// Category name as given in the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The words, uppercase, in table order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// A validated category -> word-list table.
///
/// Categories iterate in sorted name order, so seeded draws and listings are
/// stable regardless of how the table was written down.
#[derive(Debug, Clone)]
pub struct WordList {
    categories: Vec<Category>,
}

impl Default for WordList {
    /// The built-in table. Known-good, so construction cannot fail.
    fn default() -> Self {
        let categories = vec![
            Category {
                name: "crypto".to_string(),
                words: CRYPTO_WORDS.iter().map(|w| w.to_ascii_uppercase()).collect(),
            },
            Category {
                name: "tech".to_string(),
                words: TECH_WORDS.iter().map(|w| w.to_ascii_uppercase()).collect(),
            },
        ];
        Self { categories }
    }
}

impl WordList {
    /// Validate a raw table into a word list.
    ///
    /// Rejects an empty table, categories with no words, empty words, and
    /// words with characters outside A-Z. Validation happens here, once, so
    /// a constructed list can always field a draw.
    pub fn from_table(table: WordTable) -> GameResult<Self> {
        if table.is_empty() {
            return Err(GameError::EmptyWordTable);
        }

        let mut categories = Vec::with_capacity(table.len());
        for (name, words) in table {
            if words.is_empty() {
                return Err(GameError::EmptyCategory(name));
            }
            let mut upper = Vec::with_capacity(words.len());
            for word in words {
                if word.is_empty() {
                    return Err(GameError::InvalidWord {
                        category: name,
                        word,
                        reason: "word is empty".to_string(),
                    });
                }
                if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(GameError::InvalidWord {
                        category: name,
                        word,
                        reason: "contains characters outside A-Z".to_string(),
                    });
                }
                upper.push(word.to_ascii_uppercase());
            }
            categories.push(Category { name, words: upper });
        }

        Ok(Self { categories })
    }

    /// Parse a word table from JSON text.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let table: WordTable = serde_json::from_str(json)?;
        Self::from_table(table)
    }

    /// Load a word table from a JSON file.
    pub fn from_file(path: &Path) -> GameResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All categories in sorted name order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of words across all categories.
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// Draw one category uniformly at random, then one of its words.
    ///
    /// Returns the category name and the uppercase word.
    pub fn random_draw<'a>(&'a self, rng: &mut StdRng) -> (&'a str, &'a str) {
        let category = &self.categories[rng.random_range(0..self.categories.len())];
        let word = &category.words[rng.random_range(0..category.words.len())];
        (category.name.as_str(), word.as_str())
    }

    /// Look up a category by name, case-insensitively.
    ///
    /// On a miss the error carries the closest existing name when one is
    /// similar enough to be a plausible typo.
    pub fn find_category(&self, name: &str) -> GameResult<&Category> {
        let lower = name.to_lowercase();
        if let Some(category) = self
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
        {
            return Ok(category);
        }

        let suggestion = self
            .categories
            .iter()
            .map(|c| (c.name.as_str(), jaro_winkler(&lower, &c.name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(n, _)| n.to_string());

        Err(GameError::UnknownCategory {
            name: name.to_string(),
            suggestion,
        })
    }

    /// A starter word file: the built-in table as pretty-printed JSON.
    pub fn template_json() -> &'static str {
        r#"{
  "crypto": ["bitcoin", "wallet", "solana", "ledger", "gas", "blockchain"],
  "tech": ["router", "debug", "server", "network", "script", "cookie"]
}
"#
    }
}
