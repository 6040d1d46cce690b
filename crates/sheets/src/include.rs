//! Include expansion between sheets.
//!
//! Responsibilities:
//! - Copy the sections of every included sheet into the including sheet,
//!   namespaced by the included sheet's id.
//!
//! Does NOT handle:
//! - Merging of the default/user layers (runs before this) or hidden
//!   filtering (runs after, so hidden sheets stay valid include targets).
//!
//! Invariants:
//! - Expansion reads from the already merged working set, so user
//!   overrides of an included sheet are reflected in the copy.
//! - A missing include target aborts loading with `IncludeNotFound`.
//! - Copied sections are additive and use `"[{id}] {title}"` names, so
//!   they cannot collide with the including sheet's own titles.
//! - Expansion is a single pass in load order; includes are not chased
//!   recursively.

use crate::loader::SheetError;
use crate::types::{Bindings, Sheet};

/// Expand the `include` declarations of every sheet in `sheets`.
pub fn expand_includes(mut sheets: Vec<Sheet>) -> Result<Vec<Sheet>, SheetError> {
    for idx in 0..sheets.len() {
        let include_ids = sheets[idx].includes().to_vec();
        for include_id in include_ids {
            let Some(included) = sheets.iter().find(|s| s.id == include_id) else {
                return Err(SheetError::IncludeNotFound {
                    include_id,
                    sheet_id: sheets[idx].id.clone(),
                });
            };

            let namespaced: Vec<(String, Bindings)> = included
                .section
                .iter()
                .map(|(title, bindings)| {
                    (format!("[{}] {}", included.id, title), bindings.clone())
                })
                .collect();

            for (title, bindings) in namespaced {
                sheets[idx].section.insert(title, bindings);
            }
        }
    }
    Ok(sheets)
}
