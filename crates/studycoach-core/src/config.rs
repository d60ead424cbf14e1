//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Profile identity (display name, avatar, country flag)
//! - Daily focus goal
//!
//! Configuration is stored at `~/.config/studycoach/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Profile identity shown on leaderboards and team rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    /// Country flag emoji shown next to the name.
    #[serde(default = "default_country")]
    pub country: String,
}

/// Goal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_daily_focus_minutes")]
    pub daily_focus_minutes: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studycoach/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub goals: GoalsConfig,
}

// Default functions
fn default_name() -> String {
    "Productivity Hero".into()
}
fn default_avatar() -> String {
    "robot".into()
}
fn default_country() -> String {
    "🌍".into()
}
fn default_daily_focus_minutes() -> u64 {
    60
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            avatar: default_avatar(),
            country: default_country(),
        }
    }
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            daily_focus_minutes: default_daily_focus_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            goals: GoalsConfig::default(),
        }
    }
}

/// Returns `~/.config/studycoach[-dev]/` based on STUDYCOACH_ENV.
///
/// Set STUDYCOACH_ENV=dev to use the development config directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    let env = std::env::var("STUDYCOACH_ENV").unwrap_or_else(|_| "production".to_string());
    Ok(if env == "dev" {
        base.join("studycoach-dev")
    } else {
        base.join("studycoach")
    })
}

impl Config {
    /// Path of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// A missing file is not an error: the default config is written out
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(&path)?;
                Ok(cfg)
            }
        }
    }

    /// Load from an explicit path. Missing or unreadable files are errors
    /// here, unlike [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Persist to disk at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        let save_failed = |e: std::io::Error| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(save_failed)?;
        }
        std::fs::write(path, content).map_err(save_failed)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The daily focus goal in seconds.
    pub fn daily_goal_secs(&self) -> u64 {
        self.goals.daily_focus_minutes * 60
    }

    /// Rename the profile and persist. Blank names are rejected.
    pub fn set_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidValue("profile name is empty".into()));
        }
        self.profile.name = name.to_string();
        self.save()
    }

    /// Change the daily focus goal (in minutes) and persist.
    pub fn set_daily_goal_minutes(&mut self, minutes: u64) -> Result<(), ConfigError> {
        self.goals.daily_focus_minutes = minutes;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.profile.name, "Productivity Hero");
        assert_eq!(parsed.goals.daily_focus_minutes, 60);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.profile.name, "Productivity Hero");
        assert_eq!(cfg.profile.avatar, "robot");
        assert_eq!(cfg.profile.country, "🌍");
        assert_eq!(cfg.goals.daily_focus_minutes, 60);
        assert_eq!(cfg.daily_goal_secs(), 3600);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let cfg: Config = toml::from_str("[profile]\nname = \"Ada\"\n").unwrap();
        assert_eq!(cfg.profile.name, "Ada");
        assert_eq!(cfg.profile.avatar, "robot");
        assert_eq!(cfg.goals.daily_focus_minutes, 60);
    }

    #[test]
    fn save_and_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profile.name = "Ada".to_string();
        cfg.goals.daily_focus_minutes = 90;
        cfg.save_to(&path).unwrap();

        let back = Config::load_from(&path).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadFailed { .. })));
    }

    #[test]
    fn load_from_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "profile = \"not a table\"").unwrap();
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }
}
