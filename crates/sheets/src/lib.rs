//! Sheet resolution and matching for Hintsheet.
//!
//! This crate loads layered cheatsheet definitions (bundled defaults
//! overlaid by user overrides), resolves `include` composition between
//! sheets, and selects the best-matching sheet for a focused window.

mod collection;
pub mod constants;
mod include;
mod loader;
mod matcher;
mod merge;
pub mod persistence;
mod sanitize;
pub mod types;

pub use collection::SheetCollection;
pub use include::expand_includes;
pub use loader::{
    SheetError, load_default_sheets, load_sheets_from_dir, load_user_sheets, user_sheet_dir,
};
pub use matcher::find_best_sheet_id;
pub use merge::merge;
pub use persistence::{Settings, SettingsManager};
pub use sanitize::{remove_empty_sections, remove_hidden};
pub use types::{Bindings, Sections, Sheet, SheetMatch};
