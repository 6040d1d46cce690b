//! Best-sheet selection for a detected application window.
//!
//! Responsibilities:
//! - Evaluate every sheet's match regexes against the window class and
//!   title, case-insensitively with search (substring) semantics.
//! - Pick a deterministic best match among the candidates.
//!
//! Does NOT handle:
//! - Window detection itself: callers supply the two strings.
//! - Fallback policy when nothing matches (callers consult settings).
//!
//! Invariants:
//! - Pattern length is used as a proxy for specificity. This is the
//!   intentional, documented heuristic: longer `regex_wmclass` wins,
//!   `regex_title` length breaks ties, and both sorts are stable so
//!   remaining ties resolve to load order.
//! - A pattern that fails to compile disqualifies only that sheet for the
//!   lookup; it never aborts the whole pass.

use regex::RegexBuilder;

use crate::types::Sheet;

/// Find the id of the sheet best matching the focused window.
///
/// Returns `None` when no sheet matches; empty input strings are ordinary
/// non-matching inputs, not errors.
pub fn find_best_sheet_id<'a>(
    sheets: &'a [Sheet],
    wm_class: &str,
    window_title: &str,
) -> Option<&'a str> {
    let mut matching: Vec<&Sheet> = sheets
        .iter()
        .filter(|s| sheet_matches(s, wm_class, window_title))
        .collect();

    if matching.is_empty() {
        return None;
    }

    // Secondary criterion first, primary last; both sorts are stable.
    matching.sort_by(|a, b| {
        b.matcher
            .title_pattern()
            .len()
            .cmp(&a.matcher.title_pattern().len())
    });
    matching.sort_by(|a, b| {
        b.matcher
            .wmclass_pattern()
            .len()
            .cmp(&a.matcher.wmclass_pattern().len())
    });

    Some(matching[0].id.as_str())
}

fn sheet_matches(sheet: &Sheet, wm_class: &str, window_title: &str) -> bool {
    pattern_matches(sheet, sheet.matcher.wmclass_pattern(), wm_class)
        && pattern_matches(sheet, sheet.matcher.title_pattern(), window_title)
}

fn pattern_matches(sheet: &Sheet, pattern: &str, haystack: &str) -> bool {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(haystack),
        Err(e) => {
            tracing::warn!(
                sheet = %sheet.id,
                pattern,
                error = %e,
                "Invalid match pattern, sheet excluded from this lookup"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sheet;

    #[test]
    fn test_longer_wmclass_pattern_wins() {
        let sheets = vec![sheet("s1", "Fire.*", ".*"), sheet("s2", "Firefox", ".*")];
        let best = find_best_sheet_id(&sheets, "Firefox", "anything");
        assert_eq!(best, Some("s2"));
    }

    #[test]
    fn test_title_pattern_length_breaks_wmclass_ties() {
        let sheets = vec![
            sheet("generic", "code", ".*"),
            sheet("specific", "code", ".*my-project.*"),
        ];
        let best = find_best_sheet_id(&sheets, "code", "src — my-project");
        assert_eq!(best, Some("specific"));
    }

    #[test]
    fn test_full_tie_resolves_to_load_order() {
        // Same pattern lengths, both match: the earlier sheet wins.
        let sheets = vec![sheet("first", "abc", ".*"), sheet("second", "a.c", ".*")];
        let best = find_best_sheet_id(&sheets, "abc", "title");
        assert_eq!(best, Some("first"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let sheets = vec![sheet("s", "firefox", ".*")];
        assert_eq!(find_best_sheet_id(&sheets, "kitty", "shell"), None);
        assert_eq!(find_best_sheet_id(&sheets, "", ""), None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let sheets = vec![sheet("s", "firefox", ".*")];
        assert_eq!(find_best_sheet_id(&sheets, "Firefox", "t"), Some("s"));
    }

    #[test]
    fn test_matching_uses_search_not_full_match() {
        let sheets = vec![sheet("s", "fox", "tab")];
        assert_eq!(
            find_best_sheet_id(&sheets, "org.mozilla.Firefox", "New tab — browser"),
            Some("s")
        );
    }

    #[test]
    fn test_both_patterns_must_match() {
        let sheets = vec![sheet("s", "firefox", "settings")];
        assert_eq!(find_best_sheet_id(&sheets, "firefox", "downloads"), None);
    }

    #[test]
    fn test_invalid_pattern_skips_only_that_sheet() {
        let sheets = vec![sheet("broken", "fire(", ".*"), sheet("ok", "firefox", ".*")];
        assert_eq!(find_best_sheet_id(&sheets, "firefox", "t"), Some("ok"));
    }
}
