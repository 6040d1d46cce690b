//! Final clean-up passes over the merged sheet collection.
//!
//! Responsibilities:
//! - Drop sheets marked hidden.
//! - Drop sections whose binding map ended up empty after merging.
//!
//! Invariants:
//! - Both passes run after include expansion, so hidden sheets can still
//!   be included and a section emptied by a user override disappears.

use crate::types::Sheet;

/// Remove sheets marked `hidden = true`.
pub fn remove_hidden(sheets: Vec<Sheet>) -> Vec<Sheet> {
    sheets.into_iter().filter(|s| !s.is_hidden()).collect()
}

/// Remove sections with no bindings from every sheet.
pub fn remove_empty_sections(mut sheets: Vec<Sheet>) -> Vec<Sheet> {
    for sheet in &mut sheets {
        sheet.section.retain(|_, bindings| !bindings.is_empty());
    }
    sheets
}
