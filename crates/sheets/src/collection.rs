//! The loaded, immutable sheet collection.
//!
//! Responsibilities:
//! - Run the full load pipeline (load -> merge -> expand includes ->
//!   sanitize) and hold the resulting snapshot.
//! - Expose registry lookup by id and best-match queries.
//!
//! Does NOT handle:
//! - Window detection or fallback policy (the UI layer owns both).
//!
//! Invariants:
//! - A built collection has unique ids, no hidden sheets, and no empty
//!   sections.
//! - The collection is an immutable snapshot. A reload builds a new value;
//!   hosts that reload in the background swap the reference atomically
//!   instead of mutating in place.

use std::path::Path;

use crate::loader::{self, SheetError};
use crate::types::Sheet;
use crate::{include, matcher, merge, sanitize};

/// An immutable snapshot of all resolved cheatsheets.
#[derive(Debug, Clone)]
pub struct SheetCollection {
    sheets: Vec<Sheet>,
}

impl SheetCollection {
    /// Load the unified collection: bundled defaults overlaid by the
    /// sheets in the user's config directory.
    pub fn load() -> Result<Self, SheetError> {
        let user_sheets = loader::load_user_sheets()?;
        Self::assemble(loader::load_default_sheets(), user_sheets)
    }

    /// Like [`SheetCollection::load`], but reading user sheets from an
    /// explicit directory instead of the platform config dir.
    pub fn load_with_user_dir(user_dir: &Path) -> Result<Self, SheetError> {
        let user_sheets = loader::load_sheets_from_dir(user_dir)?;
        Self::assemble(loader::load_default_sheets(), user_sheets)
    }

    /// Build a collection from already loaded sheet layers.
    pub fn assemble(
        default_sheets: Vec<Sheet>,
        user_sheets: Vec<Sheet>,
    ) -> Result<Self, SheetError> {
        let sheets = merge::merge(default_sheets, user_sheets);
        let sheets = include::expand_includes(sheets)?;
        let sheets = sanitize::remove_hidden(sheets);
        let sheets = sanitize::remove_empty_sections(sheets);
        tracing::debug!(count = sheets.len(), "Loaded sheets");
        Ok(Self { sheets })
    }

    /// Look up a sheet by id.
    ///
    /// Fails loudly on an unknown id (e.g. a stale fallback setting)
    /// instead of silently substituting a different sheet.
    pub fn get(&self, sheet_id: &str) -> Result<&Sheet, SheetError> {
        self.sheets
            .iter()
            .find(|s| s.id == sheet_id)
            .ok_or_else(|| SheetError::SheetNotFound(sheet_id.to_string()))
    }

    /// Id of the sheet best matching the given window properties, if any.
    pub fn best_match(&self, wm_class: &str, window_title: &str) -> Option<&str> {
        matcher::find_best_sheet_id(&self.sheets, wm_class, window_title)
    }

    /// All sheets, in load order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
