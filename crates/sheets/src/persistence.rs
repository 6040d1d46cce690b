//! Settings persistence for user preferences.
//!
//! This module provides functionality to save and load user preferences
//! to disk using platform-standard configuration directories. The core
//! only interprets `fallback_cheatsheet`; the remaining values round-trip
//! for the (external) UI layer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_FALLBACK_SHEET, DEFAULT_ORIENTATION, DEFAULT_SORT_BY, DEFAULT_ZOOM_PERCENT,
    PROJECT_DIR_NAME, SETTINGS_FILE_NAME,
};

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the window opens fullscreen.
    pub fullscreen: bool,
    /// Binding sort order for display ("size" or "native").
    pub sort_by: String,
    /// Section flow direction ("vertical" or "horizontal").
    pub orientation: String,
    /// Zoom level in percent.
    pub zoom: u32,
    /// Sheet shown when the matcher finds nothing for the focused window.
    pub fallback_cheatsheet: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            sort_by: DEFAULT_SORT_BY.to_string(),
            orientation: DEFAULT_ORIENTATION.to_string(),
            zoom: DEFAULT_ZOOM_PERCENT,
            fallback_cheatsheet: DEFAULT_FALLBACK_SHEET.to_string(),
        }
    }
}

/// Manages loading and saving user settings to disk.
pub struct SettingsManager {
    /// Path to the settings file.
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new `SettingsManager` using platform-standard config
    /// directories (the same directory that holds user sheet files).
    ///
    /// # Errors
    /// Returns an error if `ProjectDirs::from` fails (should be rare).
    pub fn new() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("", "", PROJECT_DIR_NAME)
            .context("Failed to determine project directories")?;

        let settings_path = proj_dirs.config_dir().join(SETTINGS_FILE_NAME);
        Ok(Self { settings_path })
    }

    /// Creates a manager reading and writing an explicit path
    /// (primarily for testing).
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Returns the path to the settings file.
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Loads settings from disk.
    ///
    /// Returns defaults if the file doesn't exist or cannot be read.
    pub fn load(&self) -> Settings {
        match self.load_inner() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    error = %e,
                    "Failed to load settings, using defaults"
                );
                Settings::default()
            }
        }
    }

    fn load_inner(&self) -> Result<Settings> {
        let content = std::fs::read_to_string(&self.settings_path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.settings_path, content).context("Failed to write settings file")?;

        tracing::debug!(
            path = %self.settings_path.display(),
            "Settings saved successfully"
        );

        Ok(())
    }
}
