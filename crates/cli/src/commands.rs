//! Command execution for the hintsheet CLI.
//!
//! Responsibilities:
//! - Implement the `list`, `show`, and `match` subcommands on top of a
//!   loaded `SheetCollection`.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`) or process exit codes (see `error`).
//!
//! Invariants:
//! - `match` only falls back when the matcher found nothing; a stale
//!   fallback id fails loudly instead of printing a wrong sheet.

use anyhow::Result;
use hintsheet_sheets::{Settings, Sheet, SheetCollection};

/// Print every loaded sheet, one `id<TAB>title` per line.
pub fn run_list(collection: &SheetCollection, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(collection.sheets())?);
        return Ok(());
    }

    for sheet in collection.iter() {
        println!("{}\t{}", sheet.id, sheet.display_title());
    }
    Ok(())
}

/// Print one sheet's sections and bindings.
pub fn run_show(collection: &SheetCollection, id: &str, json: bool) -> Result<()> {
    let sheet = collection.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(sheet)?);
        return Ok(());
    }

    print_sheet(sheet);
    Ok(())
}

fn print_sheet(sheet: &Sheet) {
    println!("{} ({})", sheet.display_title(), sheet.id);
    if let Some(url) = &sheet.url {
        println!("{url}");
    }
    for (title, bindings) in &sheet.section {
        println!("\n{title}");
        let width = bindings.keys().map(String::len).max().unwrap_or(0);
        for (shortcut, description) in bindings {
            println!("  {shortcut:width$}  {description}");
        }
    }
}

/// Resolve and print the best sheet id for the given window properties.
///
/// When no sheet matches, falls back to `fallback` (or the persisted
/// `fallback_cheatsheet` setting). The fallback id is validated against
/// the collection so a stale setting surfaces as an error.
pub fn run_match(
    collection: &SheetCollection,
    settings: &Settings,
    wm_class: &str,
    title: &str,
    fallback: Option<&str>,
) -> Result<()> {
    let resolved = match collection.best_match(wm_class, title) {
        Some(id) => id,
        None => {
            let fallback_id = fallback.unwrap_or(&settings.fallback_cheatsheet);
            tracing::debug!(fallback = fallback_id, "No sheet matched, using fallback");
            collection.get(fallback_id)?.id.as_str()
        }
    };

    println!("{resolved}");
    Ok(())
}
