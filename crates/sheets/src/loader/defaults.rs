//! Bundled default sheets shipped with the application.
//!
//! Responsibilities:
//! - Embed the packaged cheatsheet documents into the binary.
//! - Parse them through the same lenient path as user files.
//!
//! Does NOT handle:
//! - User sheet directories (see files.rs).
//!
//! Invariants:
//! - The bundled set is self-contained: every `include` target referenced
//!   by a bundled sheet is itself bundled.

use super::files::parse_sheet;
use crate::types::Sheet;

/// Packaged sheet documents, one per application.
const BUNDLED_SHEETS: &[(&str, &str)] = &[
    ("firefox", include_str!("../../sheets/firefox.toml")),
    ("gnome", include_str!("../../sheets/gnome.toml")),
    ("hintsheet", include_str!("../../sheets/hintsheet.toml")),
    ("kitty", include_str!("../../sheets/kitty.toml")),
    ("nautilus", include_str!("../../sheets/nautilus.toml")),
    ("readline", include_str!("../../sheets/readline.toml")),
    ("vscode", include_str!("../../sheets/vscode.toml")),
];

/// Load the default sheets bundled with the package, sorted by id.
///
/// Bundled documents are checked in tests, but a malformed one is still
/// downgraded to a warning so a bad release never refuses to start.
pub fn load_default_sheets() -> Vec<Sheet> {
    let mut sheets: Vec<Sheet> = BUNDLED_SHEETS
        .iter()
        .filter_map(|(name, source)| match parse_sheet(source) {
            Ok(sheet) => Some(sheet),
            Err(e) => {
                tracing::warn!(sheet = name, error = %e, "Could not parse bundled sheet, skipping");
                None
            }
        })
        .collect();

    sheets.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(count = sheets.len(), "Found default sheets");
    sheets
}
