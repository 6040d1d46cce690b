//! Filesystem scanning and parsing of sheet documents.
//!
//! Responsibilities:
//! - Parse individual TOML documents into `Sheet` records.
//! - Scan a directory for sheet files and collect the parseable ones.
//!
//! Does NOT handle:
//! - The bundled default sheets (see defaults.rs).
//! - Merging or include expansion (see merge.rs / include.rs).
//!
//! Invariants:
//! - One malformed or unreadable file never aborts the scan; it is logged
//!   and contributes nothing.
//! - Results are sorted by `id` for deterministic downstream processing.

use std::path::Path;

use super::error::SheetError;
use crate::constants::SHEET_FILE_EXTENSION;
use crate::types::Sheet;

/// Parse a single sheet document.
///
/// Schema violations (missing `id`, wrong field types) surface here as
/// parse errors rather than as deferred runtime failures.
pub(crate) fn parse_sheet(source: &str) -> Result<Sheet, toml::de::Error> {
    toml::from_str(source)
}

/// Load all sheet documents from `dir`, sorted by id.
///
/// A missing directory is treated as an empty one. Files that cannot be
/// read or parsed are skipped with a warning.
pub fn load_sheets_from_dir(dir: &Path) -> Result<Vec<Sheet>, SheetError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "Sheet directory does not exist");
        return Ok(Vec::new());
    }

    let mut sheets = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SHEET_FILE_EXTENSION) {
            continue;
        }

        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read sheet file, skipping");
                continue;
            }
        };

        match parse_sheet(&source) {
            Ok(sheet) => sheets.push(sheet),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not parse sheet file, skipping");
            }
        }
    }

    sheets.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(count = sheets.len(), dir = %dir.display(), "Found sheets");
    Ok(sheets)
}
