//! Configuration management for erd-picker.
//!
//! Configuration is assembled from several sources:
//! - A TOML file following the XDG Base Directory specification
//! - Environment variables (`ERD_PICKER_*`)
//! - Command line arguments (see [`Args`](crate::models::Args))
//!
//! ## Example
//!
//! ```rust,no_run
//! use erd_picker::Config;
//!
//! let file = Config::load_from_file().unwrap();
//! let env = Config::load_from_env();
//!
//! // Environment takes precedence over the file
//! let merged = Config::default().merge(file).merge(env);
//! let app_config = merged.into_app_config();
//! println!("Reading projects from {}", app_config.data());
//! ```

use crate::{error::ConfigError, models::AppConfig, parsed_property::ParsedProperty};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default project data document.
pub const DEFAULT_DATA_PATH: &str = "projects.json";

/// Temporary struct for deserializing TOML configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    pub data: Option<String>,
    pub session_dir: Option<PathBuf>,
}

/// Partial configuration from one source; `None` means "not provided".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Path of the project data document, or `-` for stdin.
    pub data: Option<ParsedProperty<String>>,
    /// Directory of the session storage file.
    pub session_dir: Option<ParsedProperty<PathBuf>>,
}

impl Config {
    /// Load configuration from the XDG config directory.
    ///
    /// A missing file yields an empty configuration.
    #[must_use = "this returns the loaded configuration which should be used"]
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::parse_file(&config_content, config_path)
    }

    fn parse_file(content: &str, config_path: PathBuf) -> Result<Self> {
        let config_file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: config_path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            data: config_file
                .data
                .map(|v| ParsedProperty::File(v.clone(), config_path.clone(), v)),
            session_dir: config_file.session_dir.map(|v| {
                let original = v.display().to_string();
                ParsedProperty::File(v, config_path.clone(), original)
            }),
        })
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            data: std::env::var("ERD_PICKER_DATA")
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            session_dir: std::env::var("ERD_PICKER_SESSION_DIR")
                .ok()
                .map(|v| ParsedProperty::Env(PathBuf::from(&v), v)),
        }
    }

    /// Merge this config with another, preferring values from other when they exist
    pub fn merge(self, other: Self) -> Self {
        Self {
            data: other.data.or(self.data),
            session_dir: other.session_dir.or(self.session_dir),
        }
    }

    /// Fill every unset value with its default.
    pub fn into_app_config(self) -> AppConfig {
        AppConfig {
            data: self
                .data
                .unwrap_or_else(|| ParsedProperty::Default(DEFAULT_DATA_PATH.to_string())),
            session_dir: self
                .session_dir
                .unwrap_or_else(|| ParsedProperty::Default(default_session_dir())),
        }
    }

    /// Get the XDG config file path, creating its directory if needed.
    fn get_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .ok_or(ConfigError::NoConfigDirectory)?
                .join(".config"),
        };

        let app_config_dir = config_dir.join("erd-picker");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir).map_err(|e| {
                ConfigError::DirectoryCreationError {
                    path: app_config_dir.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Create a sample config file for user reference.
    ///
    /// An existing file is never overwritten.
    #[must_use = "this operation can fail and the result should be checked"]
    pub fn create_sample_config() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            println!("Config already exists at: {}", config_path.display());
            return Ok(());
        }

        let sample_config = r#"# erd-picker configuration file
# Location: ~/.config/erd-picker/config.toml (or $XDG_CONFIG_HOME/erd-picker/config.toml)

# Project data document exported by the dashboard (optional, defaults to "projects.json").
# Use "-" to read the document from stdin.
# data = "/path/to/projects.json"

# Directory of the session storage file shared with the ERD viewer
# (optional, defaults to $XDG_RUNTIME_DIR/erd-picker or the system temp directory).
# session_dir = "/run/user/1000/erd-picker"
"#;

        fs::write(&config_path, sample_config).with_context(|| {
            format!(
                "Failed to write sample config to: {}",
                config_path.display()
            )
        })?;

        println!("Sample config created at: {}", config_path.display());
        Ok(())
    }
}

/// Session directory used when none is configured.
pub fn default_session_dir() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("erd-picker")
}
