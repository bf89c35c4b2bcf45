// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[lightbox]` - Overlay behavior (failure message duration)
//! - `[preload]` - Background preloading and the decoded image cache
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or `ICED_LIGHTBOX_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Overlay behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Seconds the failure message stays visible.
    #[serde(
        default = "default_failure_reset_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub failure_reset_secs: Option<u64>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            failure_reset_secs: default_failure_reset_secs(),
        }
    }
}

impl LightboxConfig {
    /// Failure message duration, clamped to the supported range.
    #[must_use]
    pub fn failure_reset_delay(&self) -> Duration {
        let secs = self
            .failure_reset_secs
            .unwrap_or(DEFAULT_FAILURE_RESET_SECS)
            .clamp(MIN_FAILURE_RESET_SECS, MAX_FAILURE_RESET_SECS);
        Duration::from_secs(secs)
    }
}

/// Preloading and decoded image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreloadConfig {
    /// Fetch the neighbouring image ahead of navigation.
    #[serde(default = "default_preload_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Decoded image cache size in megabytes.
    #[serde(default = "default_cache_mb", skip_serializing_if = "Option::is_none")]
    pub cache_mb: Option<u32>,

    /// Maximum number of decoded images kept in memory.
    #[serde(default = "default_max_images", skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            enabled: default_preload_enabled(),
            cache_mb: default_cache_mb(),
            max_images: default_max_images(),
        }
    }
}

impl PreloadConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Cache size in bytes, clamped to the supported range.
    #[must_use]
    pub fn cache_bytes(&self) -> usize {
        let mb = self
            .cache_mb
            .unwrap_or(DEFAULT_CACHE_MB)
            .clamp(MIN_CACHE_MB, MAX_CACHE_MB);
        mb as usize * 1024 * 1024
    }

    /// Cache entry count, clamped to the supported range.
    #[must_use]
    pub fn cache_max_images(&self) -> usize {
        self.max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub preload: PreloadConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_failure_reset_secs() -> Option<u64> {
    Some(DEFAULT_FAILURE_RESET_SECS)
}

fn default_preload_enabled() -> Option<bool> {
    Some(true)
}

fn default_cache_mb() -> Option<u32> {
    Some(DEFAULT_CACHE_MB)
}

fn default_max_images() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_IMAGES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            lightbox: LightboxConfig {
                failure_reset_secs: Some(5),
            },
            preload: PreloadConfig {
                enabled: Some(false),
                cache_mb: Some(64),
                max_images: Some(8),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[lightbox\nfailure_reset_secs = ").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.lightbox, LightboxConfig::default());
        assert!(loaded.preload.is_enabled());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_to_path_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("save");

        let (config, warning) = load_with_override(Some(temp_dir.path().join("nested")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn failure_reset_delay_is_clamped() {
        let config = LightboxConfig {
            failure_reset_secs: Some(0),
        };
        assert_eq!(
            config.failure_reset_delay(),
            Duration::from_secs(MIN_FAILURE_RESET_SECS)
        );

        let config = LightboxConfig {
            failure_reset_secs: Some(3600),
        };
        assert_eq!(
            config.failure_reset_delay(),
            Duration::from_secs(MAX_FAILURE_RESET_SECS)
        );

        assert_eq!(
            LightboxConfig::default().failure_reset_delay(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn cache_limits_are_clamped() {
        let config = PreloadConfig {
            enabled: None,
            cache_mb: Some(1),
            max_images: Some(1000),
        };
        assert_eq!(config.cache_bytes(), MIN_CACHE_MB as usize * 1024 * 1024);
        assert_eq!(config.cache_max_images(), MAX_CACHE_MAX_IMAGES);
        assert!(config.is_enabled());
    }
}
