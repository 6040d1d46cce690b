//! Sheet type definitions for Hintsheet.
//!
//! Responsibilities:
//! - Define the `Sheet` record parsed from cheatsheet TOML documents.
//! - Define the `SheetMatch` criteria evaluated against window properties.
//! - Provide accessors with the documented defaults for optional fields.
//!
//! Does NOT handle:
//! - Reading or parsing sheet files (see `loader` module).
//! - Merging, include expansion, or matching (see the respective modules).
//!
//! Invariants:
//! - `id` is the only required field; every other field has a well-defined
//!   absent/default interpretation.
//! - Section maps preserve the insertion order of the source document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MATCH_PATTERN;

/// Shortcut-to-description pairs within one section.
pub type Bindings = IndexMap<String, String>;

/// Ordered mapping from section title to its bindings.
pub type Sections = IndexMap<String, Bindings>;

/// One cheatsheet for one target application.
///
/// Sheets are parsed from TOML documents, merged across the default and
/// user layers, and then treated as immutable for the rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    /// Unique identifier, used as the merge key and caller-facing selector.
    pub id: String,

    /// Display label; falls back to `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Regex criteria evaluated against the focused window.
    #[serde(rename = "match", default)]
    pub matcher: SheetMatch,

    /// Ordered sections of keybindings.
    #[serde(default)]
    pub section: Sections,

    /// Ids of other sheets whose sections are copied into this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// When true, the sheet is dropped from the final collection. Hidden
    /// sheets stay resolvable as include targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Optional documentation link, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Sheet {
    /// Display label for the sheet (explicit title, or the id).
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Whether the sheet is excluded from the final collection.
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Include targets declared by this sheet.
    pub fn includes(&self) -> &[String] {
        self.include.as_deref().unwrap_or_default()
    }
}

/// Window-matching criteria of a sheet.
///
/// Both patterns are regular expressions evaluated with case-insensitive
/// search semantics (substring match, not anchored). An absent pattern
/// matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetMatch {
    /// Pattern evaluated against the window class / process name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_wmclass: Option<String>,

    /// Pattern evaluated against the window title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_title: Option<String>,
}

impl SheetMatch {
    /// Effective window-class pattern.
    pub fn wmclass_pattern(&self) -> &str {
        self.regex_wmclass.as_deref().unwrap_or(DEFAULT_MATCH_PATTERN)
    }

    /// Effective window-title pattern.
    pub fn title_pattern(&self) -> &str {
        self.regex_title.as_deref().unwrap_or(DEFAULT_MATCH_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_id() {
        let sheet: Sheet = toml::from_str("id = \"firefox\"").unwrap();
        assert_eq!(sheet.display_title(), "firefox");

        let sheet: Sheet = toml::from_str("id = \"firefox\"\ntitle = \"Firefox\"").unwrap();
        assert_eq!(sheet.display_title(), "Firefox");
    }

    #[test]
    fn test_absent_patterns_match_everything() {
        let matcher = SheetMatch::default();
        assert_eq!(matcher.wmclass_pattern(), ".*");
        assert_eq!(matcher.title_pattern(), ".*");
    }

    #[test]
    fn test_hidden_defaults_to_false() {
        let sheet: Sheet = toml::from_str("id = \"x\"").unwrap();
        assert!(!sheet.is_hidden());
        assert!(sheet.includes().is_empty());
    }

    #[test]
    fn test_section_order_is_preserved() {
        let source = r#"
            id = "editor"

            [section.Zulu]
            "Ctrl + z" = "Undo"

            [section.Alpha]
            "Ctrl + a" = "Select all"
        "#;
        let sheet: Sheet = toml::from_str(source).unwrap();
        let titles: Vec<&str> = sheet.section.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Zulu", "Alpha"]);
    }
}
