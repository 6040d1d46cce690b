//! Error types for sheet loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for all sheet loading and resolution failures.
//!
//! Does NOT handle:
//! - Per-file parse failures: those are deliberately recovered inside the
//!   loader (logged, file skipped) and never surface as an error value.
//! - Error handling for settings persistence (see persistence.rs).
//!
//! Invariants:
//! - All variants include the identifiers needed to pinpoint the offending
//!   sheet or path in user configuration.

use thiserror::Error;

/// Errors that can occur while loading or resolving sheets.
#[derive(Error, Debug)]
pub enum SheetError {
    /// An `include` entry referenced a sheet id that does not exist in the
    /// merged working set. This aborts loading: continuing would silently
    /// produce an incomplete cheatsheet.
    #[error("Sheet '{include_id}' included by '{sheet_id}' not found")]
    IncludeNotFound {
        include_id: String,
        sheet_id: String,
    },

    /// A registry lookup asked for an id absent from the final collection.
    #[error("No sheet with id '{0}' in the loaded collection")]
    SheetNotFound(String),

    #[error("Unable to determine user sheet directory: {0}")]
    SheetDirUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
