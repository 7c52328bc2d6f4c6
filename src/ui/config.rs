//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/folio/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Every field has a default, so a partial
//! file (or no file at all) is valid.
//!
//! ```json
//! {
//!   "theme": "Violet Night",
//!   "launch_browser": true,
//!   "contact_form": "status",
//!   "animation": {
//!     "typing_speed_ms": 85,
//!     "typing_pause_ms": 2000,
//!     "marquee_speed": 8.0,
//!     "strip_speed": 12.0,
//!     "counter_duration_ms": 2000
//!   }
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::anim::counter::DEFAULT_DURATION;
use crate::anim::typewriter::{DEFAULT_PAUSE, DEFAULT_SPEED};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What submitting the contact form does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFormMode {
    /// Validate the address and show a transient status message.
    #[default]
    Status,
    /// Skip validation and open the messaging link.
    Redirect,
}

/// Animation tuning. Speeds are in terminal columns per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AnimationConfig {
    pub typing_speed_ms: u64,
    pub typing_pause_ms: u64,
    pub marquee_speed: f64,
    pub strip_speed: f64,
    pub counter_duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: DEFAULT_SPEED.as_millis() as u64,
            typing_pause_ms: DEFAULT_PAUSE.as_millis() as u64,
            marquee_speed: 8.0,
            strip_speed: 12.0,
            counter_duration_ms: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

impl AnimationConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn typing_pause(&self) -> Duration {
        Duration::from_millis(self.typing_pause_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Open outbound links in the system browser.
    #[serde(default = "default_launch_browser")]
    pub launch_browser: bool,
    #[serde(default)]
    pub contact_form: ContactFormMode,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_theme_name() -> String {
    "Violet Night".to_string()
}

fn default_launch_browser() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            launch_browser: default_launch_browser(),
            contact_form: ContactFormMode::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the default config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "folio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Violet Night");
        assert!(config.launch_browser);
        assert_eq!(config.contact_form, ContactFormMode::Status);
        assert_eq!(config.animation.typing_speed(), Duration::from_millis(85));
        assert_eq!(config.animation.typing_pause(), Duration::from_millis(2000));
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_animation_table() {
        let json = r#"{"animation": {"strip_speed": 30.0}}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.animation.strip_speed, 30.0);
        assert_eq!(config.animation.typing_speed_ms, 85);
    }

    #[test]
    fn test_contact_form_mode_names() {
        let json = r#"{"contact_form": "redirect"}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.contact_form, ContactFormMode::Redirect);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: "Catppuccin Latte".to_string(),
            launch_browser: false,
            ..Config::default()
        };

        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, "Violet Night");
    }

    #[test]
    fn test_load_from_garbage_is_an_error() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "not json").expect("write");

        let err = Config::load_from(&config_path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Violet Day", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
