pub mod play;
pub mod simulate;
pub mod tui;
pub mod words;

use std::path::Path;

use gm_core::WordList;

/// Load the word table: a JSON file if one was given, the built-in table
/// otherwise. A misconfigured file is fatal before any round starts.
pub fn load_words(path: Option<&Path>) -> Result<WordList, String> {
    match path {
        Some(path) => {
            WordList::from_file(path).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => Ok(WordList::default()),
    }
}
