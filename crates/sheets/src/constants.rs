//! Centralized constants for the Hintsheet workspace.
//!
//! This module contains default values used across crates to avoid
//! magic value duplication and improve maintainability.

// =============================================================================
// Sheet Loading
// =============================================================================

/// File extension of sheet documents scanned in the user directory.
pub const SHEET_FILE_EXTENSION: &str = "toml";

/// Pattern used when a sheet omits one of its match regexes.
pub const DEFAULT_MATCH_PATTERN: &str = ".*";

// =============================================================================
// Platform Paths
// =============================================================================

/// Application name used for `directories::ProjectDirs` resolution.
pub const PROJECT_DIR_NAME: &str = "hintsheet";

/// File name of the persisted settings store inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// =============================================================================
// Settings Defaults
// =============================================================================

/// Sheet shown when the matcher finds nothing and the user configured no
/// other fallback.
pub const DEFAULT_FALLBACK_SHEET: &str = "hintsheet";

/// Default binding sort order for display ("size" keeps native order
/// grouped by section height).
pub const DEFAULT_SORT_BY: &str = "size";

/// Default window orientation for the (external) UI layer.
pub const DEFAULT_ORIENTATION: &str = "vertical";

/// Default zoom percentage for the (external) UI layer.
pub const DEFAULT_ZOOM_PERCENT: u32 = 100;
