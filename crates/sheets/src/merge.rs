//! Merging of user sheets onto the default layer.
//!
//! Responsibilities:
//! - Combine default and user sheets by id (update-or-append).
//! - Apply user overrides at section and top-level-field granularity.
//!
//! Does NOT handle:
//! - Include expansion (see include.rs) or hidden/empty filtering
//!   (see sanitize.rs), both of which run after merging.
//!
//! Invariants:
//! - Ids stay unique: an id already present is updated in place, never
//!   duplicated.
//! - A user section with the same title replaces the default's bindings
//!   for that title; other default sections are preserved.
//! - Match regexes merge field-wise, so overriding one pattern keeps the
//!   other from the default sheet.

use crate::types::Sheet;

/// Merge `user_sheets` into `default_sheets`.
///
/// The returned collection is the sole source of truth; the input default
/// sheets are consumed and mutated in place.
pub fn merge(mut default_sheets: Vec<Sheet>, user_sheets: Vec<Sheet>) -> Vec<Sheet> {
    for user_sheet in user_sheets {
        update_or_append(&mut default_sheets, user_sheet);
    }
    default_sheets
}

fn update_or_append(sheets: &mut Vec<Sheet>, new_sheet: Sheet) {
    let Some(existing) = sheets.iter_mut().find(|s| s.id == new_sheet.id) else {
        sheets.push(new_sheet);
        return;
    };

    // Section-wise: same title replaces, new titles append in order.
    for (title, bindings) in new_sheet.section {
        existing.section.insert(title, bindings);
    }

    // Field-wise match merge.
    if let Some(pattern) = new_sheet.matcher.regex_wmclass {
        existing.matcher.regex_wmclass = Some(pattern);
    }
    if let Some(pattern) = new_sheet.matcher.regex_title {
        existing.matcher.regex_title = Some(pattern);
    }

    // Shallow overwrite of the remaining top-level fields.
    if let Some(title) = new_sheet.title {
        existing.title = Some(title);
    }
    if let Some(include) = new_sheet.include {
        existing.include = Some(include);
    }
    if let Some(hidden) = new_sheet.hidden {
        existing.hidden = Some(hidden);
    }
    if let Some(url) = new_sheet.url {
        existing.url = Some(url);
    }
}
