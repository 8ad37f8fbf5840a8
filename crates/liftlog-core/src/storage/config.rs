//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Fitness level (scales the catalog split)
//! - Dark mode flag
//! - Onboarding completion flag
//!
//! Configuration is stored at `~/.config/liftlog/config.toml`. Every field
//! carries a serde default so a config written by an older build loads
//! without error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::catalog::FitnessLevel;
use crate::error::{Result, StoreError};

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/liftlog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. The new value is parsed
    /// according to the existing field's type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        let serde_json::Value::Object(ref mut obj) = json else {
            return Err(StoreError::UnknownKey(key.to_string()));
        };
        let existing = obj
            .get(key)
            .ok_or_else(|| StoreError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => {
                let parsed = value.parse::<bool>().map_err(|_| StoreError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as bool"),
                })?;
                serde_json::Value::Bool(parsed)
            }
            _ => serde_json::Value::String(value.to_ascii_lowercase()),
        };

        obj.insert(key.to_string(), new_value);
        *self = serde_json::from_value(json).map_err(|e| StoreError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()?;
        Ok(())
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
        assert_eq!(parsed.fitness_level, FitnessLevel::Beginner);
        assert!(!parsed.dark_mode);
        assert!(!parsed.onboarding_complete);
    }

    #[test]
    fn empty_file_fills_all_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.fitness_level, FitnessLevel::Beginner);
        assert!(!parsed.dark_mode);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let parsed: Config = toml::from_str("dark_mode = true").unwrap();
        assert!(parsed.dark_mode);
        assert_eq!(parsed.fitness_level, FitnessLevel::Beginner);
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let cfg = Config {
            fitness_level: FitnessLevel::Advanced,
            dark_mode: true,
            onboarding_complete: false,
        };
        assert_eq!(cfg.get("fitness_level").as_deref(), Some("advanced"));
        assert_eq!(cfg.get("dark_mode").as_deref(), Some("true"));
        assert!(cfg.get("missing_key").is_none());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("nonexistent", "true"),
            Err(StoreError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_bool() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("dark_mode", "not_a_bool"),
            Err(StoreError::InvalidValue { .. })
        ));
    }

    #[test]
    fn set_rejects_invalid_fitness_level() {
        let mut cfg = Config::default();
        assert!(cfg.set("fitness_level", "superhuman").is_err());
        // Config must be left untouched on failure.
        assert_eq!(cfg.fitness_level, FitnessLevel::Beginner);
    }
}
