// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[notifications]` - Default toast lifetimes per category, in milliseconds
//!
//! # Examples
//!
//! ```no_run
//! use frontkit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::{Category, Lifetime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Default notification lifetimes, in milliseconds. Zero means "until
/// dismissed".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    pub success_ms: u64,
    pub info_ms: u64,
    pub warning_ms: u64,
    pub error_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_ms: DEFAULT_SUCCESS_LIFETIME_MS,
            info_ms: DEFAULT_INFO_LIFETIME_MS,
            warning_ms: DEFAULT_WARNING_LIFETIME_MS,
            error_ms: DEFAULT_ERROR_LIFETIME_MS,
        }
    }
}

impl NotificationConfig {
    /// Default lifetime for notifications of `category`.
    #[must_use]
    pub fn lifetime_for(&self, category: Category) -> Lifetime {
        let millis = match category {
            Category::Success => self.success_ms,
            Category::Info => self.info_ms,
            Category::Warning => self.warning_ms,
            Category::Error => self.error_ms,
        };
        Lifetime::new(millis)
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or malformed
/// one yields defaults plus a warning message for the caller to surface.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(dir) = paths::config_dir() else {
        return (Config::default(), None);
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(loaded) => loaded,
        Err(err) => {
            let message = format!("failed to read {}: {err}", path.display());
            warn!("{message}");
            (Config::default(), Some(message))
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(dir) = paths::config_dir() {
        return save_to_path(config, &dir.join(CONFIG_FILE));
    }
    Ok(())
}

/// Loads a configuration file.
///
/// Malformed TOML is not an error: defaults are returned together with a
/// warning describing the parse failure.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<(Config, Option<String>)> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok((config, None)),
        Err(err) => {
            let message = format!(
                "invalid settings in {}, using defaults: {}",
                path.display(),
                err.message()
            );
            warn!("{message}");
            Ok((Config::default(), Some(message)))
        }
    }
}

/// Writes a configuration file, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
