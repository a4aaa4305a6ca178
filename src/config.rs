//! Configuration module for the calculator CLI.
//!
//! Layered configuration, lowest to highest priority:
//! - Default values
//! - TOML configuration file (`.calcchain/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the caller)
//!
//! Settings only affect presentation and logging. Arithmetic tolerances are
//! fixed constants in [`crate::math`].
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CALC_` and use double underscores
//! to separate nested levels:
//! - `CALC_DISPLAY__PRECISION=4` sets `display.precision`
//! - `CALC_DISPLAY__JSON=true` sets `display.json`
//! - `CALC_LOGGING__DEFAULT=debug` sets `logging.default`

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::calculator::DEFAULT_PRECISION;

/// Directory holding the settings file, searched upward from the cwd.
pub const CONFIG_DIR: &str = ".calcchain";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "CALC_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output formatting
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Digits after the decimal point in printed results
    #[serde(default = "default_precision")]
    pub precision: u16,

    /// Emit JSON envelopes instead of text
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for all modules (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `cli = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_precision() -> u16 {
    DEFAULT_PRECISION
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            json: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, discovering the settings file
    /// from the current directory upward.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config().unwrap_or_else(Self::config_path);
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honoring env overrides.
    ///
    /// A missing file is not an error; defaults and env vars apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels; single underscores
            // stay inside field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Default location relative to the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Find `.calcchain/settings.toml` in the current directory or an ancestor.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self).context("Cannot serialize settings")?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Cannot write {}", path.display()))?;

        Ok(())
    }

    /// Create a default settings file in the current directory.
    pub fn init_config_file(force: bool) -> anyhow::Result<PathBuf> {
        let config_path = Self::config_path();

        if !force && config_path.exists() {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite",
                config_path.display()
            );
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.display.precision, 2);
        assert!(!settings.display.json);
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2

[display]
precision = 5
json = true

[logging]
default = "info"

[logging.modules]
cli = "debug"
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 2);
        assert_eq!(settings.display.precision, 5);
        assert!(settings.display.json);
        assert_eq!(settings.logging.default, "info");
        assert_eq!(settings.logging.modules["cli"], "debug");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[display]\nprecision = 0\n").unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.display.precision, 0);

        // Untouched sections keep their defaults
        assert_eq!(settings.version, 1);
        assert!(!settings.display.json);
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.display.precision, 2);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[display]\nprecision = \"lots\"\n").unwrap();

        assert!(Settings::load_from(&config_path).is_err());
    }

    #[test]
    fn test_precision_out_of_range_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[display]\nprecision = 65535\n").unwrap();
        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.display.precision, u16::MAX);

        fs::write(&config_path, "[display]\nprecision = 65536\n").unwrap();
        assert!(Settings::load_from(&config_path).is_err());
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.precision = 7;
        settings
            .logging
            .modules
            .insert("calculator".to_string(), "trace".to_string());

        settings.save(&config_path).unwrap();

        let loaded = Settings::load_from(&config_path).unwrap();
        assert_eq!(loaded, settings);
    }
}
