//! Print the word table.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use gm_core::words::Category;
use gm_core::{GameError, WordList};

pub fn run(path: Option<&Path>, category: Option<&str>, template: bool) -> Result<(), String> {
    if template {
        print!("{}", WordList::template_json());
        return Ok(());
    }

    let list = super::load_words(path)?;

    let categories: Vec<&Category> = match category {
        Some(name) => match list.find_category(name) {
            Ok(cat) => vec![cat],
            Err(GameError::UnknownCategory { name, suggestion }) => {
                return Err(match suggestion {
                    Some(s) => format!("unknown category '{name}' (did you mean '{s}'?)"),
                    None => format!("unknown category '{name}'"),
                });
            }
            Err(e) => return Err(e.to_string()),
        },
        None => list.categories().iter().collect(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Words", "Word list"]);

    for cat in &categories {
        table.add_row(vec![
            cat.name().to_string(),
            cat.words().len().to_string(),
            cat.words().join(", "),
        ]);
    }

    println!("{table}");
    println!();
    let total: usize = categories.iter().map(|c| c.words().len()).sum();
    println!("  {} categories, {total} words", categories.len());

    Ok(())
}
