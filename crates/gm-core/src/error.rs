//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while configuring or driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The word table has no categories at all.
    #[error("word table has no categories")]
    EmptyWordTable,

    /// A category exists but contains no words.
    #[error("category '{0}' has no words")]
    EmptyCategory(String),

    /// A word cannot be played over the A-Z alphabet.
    #[error("invalid word '{word}' in category '{category}': {reason}")]
    InvalidWord {
        /// Category the word belongs to.
        category: String,
        /// The offending word as given.
        word: String,
        /// Why the word was rejected.
        reason: String,
    },

    /// Requested category does not exist in the table.
    #[error("unknown category: {name}")]
    UnknownCategory {
        /// The name that failed to resolve.
        name: String,
        /// Closest existing category name, if one is similar enough.
        suggestion: Option<String>,
    },

    /// Word file could not be read.
    #[error("cannot read word file: {0}")]
    WordFileIo(#[from] std::io::Error),

    /// Word file is not JSON of the expected shape.
    #[error("malformed word file: {0}")]
    WordFileFormat(#[from] serde_json::Error),

    /// A guess was submitted with no round in progress.
    #[error("no round in progress")]
    NoActiveRound,

    /// A round start was requested while one is already in progress.
    #[error("a round is already in progress")]
    RoundActive,
}
