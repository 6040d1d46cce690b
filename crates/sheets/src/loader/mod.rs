//! Sheet loading from bundled defaults and the user config directory.
//!
//! Responsibilities:
//! - Load the packaged default sheets and the user's override sheets.
//! - Resolve the platform-appropriate user sheet directory.
//!
//! Does NOT handle:
//! - Combining the two layers (see merge.rs) or include expansion.
//! - Settings persistence (see persistence.rs).
//!
//! Invariants / Assumptions:
//! - Loading is lenient per file: parse failures are logged and skipped.
//! - Both loaders return their sheets sorted by `id`.

mod defaults;
mod error;
mod files;

use std::path::PathBuf;

pub use defaults::load_default_sheets;
pub use error::SheetError;
pub use files::load_sheets_from_dir;

use crate::constants::PROJECT_DIR_NAME;
use crate::types::Sheet;

#[cfg(test)]
mod tests;

/// Returns the directory scanned for user-supplied sheet files.
///
/// - Linux/macOS: `~/.config/hintsheet/`
/// - Windows: `%AppData%\hintsheet\`
pub fn user_sheet_dir() -> Result<PathBuf, SheetError> {
    let proj_dirs = directories::ProjectDirs::from("", "", PROJECT_DIR_NAME).ok_or_else(|| {
        SheetError::SheetDirUnavailable("no valid home directory detected".to_string())
    })?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Load cheatsheets from TOML files in the user's config directory.
pub fn load_user_sheets() -> Result<Vec<Sheet>, SheetError> {
    load_sheets_from_dir(&user_sheet_dir()?)
}
