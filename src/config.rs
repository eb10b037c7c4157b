//! Configuration management for camera-facing
//!
//! Loads and saves the selector settings (camera-id filter, chooser variant)
//! and the default log level from a TOML file.

use crate::chooser::ChooserVariant;
use crate::errors::SelectorError;
use crate::selector::DEFAULT_CAMERA_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectorConfig {
    pub selection: SelectionConfig,
    pub logging: LoggingConfig,
}

/// Device selection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Substring a label must contain to count as a matched candidate
    pub camera_id: String,
    /// Built-in heuristic flavour
    pub variant: ChooserVariant,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "camera_facing=debug")
    pub level: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            camera_id: DEFAULT_CAMERA_ID.to_string(),
            variant: ChooserVariant::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl SelectorConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SelectorError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| SelectorError::Config(format!("Failed to read config file: {}", e)))?;

        let config: SelectorConfig = toml::from_str(&contents)
            .map_err(|e| SelectorError::Config(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SelectorError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SelectorError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string)
            .map_err(|e| SelectorError::Config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, SelectorError> {
        toml::to_string_pretty(self)
            .map_err(|e| SelectorError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("camera-facing.toml")
    }

    /// Load `path`, or [`Self::default_path`] when none is given, and validate it.
    ///
    /// A missing file yields the defaults; an unreadable, malformed or invalid
    /// file is an error rather than being replaced by the defaults.
    pub fn load_effective(path: Option<&Path>) -> Result<Self, SelectorError> {
        let default_path = Self::default_path();
        let path = path.unwrap_or(default_path.as_path());

        let config = Self::load_from_file(path)?;
        config.validate().map_err(|e| match e {
            SelectorError::Config(msg) => SelectorError::Config(format!("{:?}: {}", path, msg)),
            other => other,
        })?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), SelectorError> {
        if self.selection.camera_id.trim() != self.selection.camera_id {
            return Err(SelectorError::Config(
                "camera_id must not have leading or trailing whitespace".to_string(),
            ));
        }

        // Accept either a bare level or a full env_logger filter directive
        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(SelectorError::Config("Log level must not be empty".to_string()));
        }
        if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(SelectorError::Config(format!(
                "Unknown log level '{}' (expected one of {})",
                level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectorConfig::default();
        assert_eq!(config.selection.camera_id, "camera2 0");
        assert_eq!(config.selection.variant, ChooserVariant::RearThenFront);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation() {
        assert!(SelectorConfig::default().validate().is_ok());

        let mut padded = SelectorConfig::default();
        padded.selection.camera_id = " camera2 0".to_string();
        assert!(padded.validate().is_err());

        let mut bad_level = SelectorConfig::default();
        bad_level.logging.level = "loud".to_string();
        assert!(bad_level.validate().is_err());

        let mut directive = SelectorConfig::default();
        directive.logging.level = "camera_facing=debug".to_string();
        assert!(directive.validate().is_ok());

        let mut empty_filter = SelectorConfig::default();
        empty_filter.selection.camera_id = String::new();
        assert!(empty_filter.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("nested").join("camera-facing.toml");

        let mut config = SelectorConfig::default();
        config.selection.variant = ChooserVariant::RearOnly;
        config.selection.camera_id = "camera2 2".to_string();
        config.save_to_file(&config_path).unwrap();

        let loaded = SelectorConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_toml_format() {
        let toml_string = SelectorConfig::default().to_toml().unwrap();

        assert!(toml_string.contains("[selection]"));
        assert!(toml_string.contains("[logging]"));
        assert!(toml_string.contains("camera_id = \"camera2 0\""));
        assert!(toml_string.contains("variant = \"rear-then-front\""));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SelectorConfig = toml::from_str("[selection]\nvariant = \"rear-only\"\n").unwrap();
        assert_eq!(config.selection.variant, ChooserVariant::RearOnly);
        assert_eq!(config.selection.camera_id, "camera2 0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = SelectorConfig::load_from_file("nonexistent_file.toml");
        assert_eq!(result.unwrap(), SelectorConfig::default());
    }

    #[test]
    fn test_load_effective_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SelectorConfig::default_path());
        fs::write(
            &path,
            "[selection]\ncamera_id = \"camera2 1\"\nvariant = \"rear_only\"\n",
        )
        .unwrap();

        let result = SelectorConfig::load_effective(Some(&path));
        assert!(matches!(result, Err(SelectorError::Config(_))));
    }

    #[test]
    fn test_load_effective_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camera-facing.toml");
        fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = SelectorConfig::load_effective(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_load_effective_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(
            SelectorConfig::load_effective(Some(&path)).unwrap(),
            SelectorConfig::default()
        );
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "selection = [").unwrap();
        assert!(matches!(
            SelectorConfig::load_from_file(&path),
            Err(SelectorError::Config(_))
        ));
    }
}
