//! Configuration file loading with precedence handling.

use crate::settings::{Language, ThemeMode};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Public REST Countries v3.1 endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value outside its allowed set.
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue {
        /// Setting name as written in the config file.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/atlas/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Appearance: "light" or "dark".
    #[serde(default)]
    pub theme: Option<String>,

    /// Interface language code: "en", "fr", "es" or "de".
    #[serde(default)]
    pub language: Option<String>,

    /// Base URL of the REST Countries API.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Key for the static map image service.
    #[serde(default)]
    pub maps_api_key: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// `Debug` output masks `maps_api_key` since the config is logged at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: ThemeMode,
    pub language: Language,
    pub api_base_url: String,
    pub maps_api_key: Option<String>,
    pub request_timeout_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("theme", &self.theme)
            .field("language", &self.language)
            .field("api_base_url", &self.api_base_url)
            .field("maps_api_key", &self.maps_api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            language: Language::English,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            maps_api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides collected from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub theme: Option<ThemeMode>,
    pub language: Option<Language>,
    pub api_base_url: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/atlas/atlas.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("atlas").join("atlas.log")
    } else {
        PathBuf::from("atlas.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/atlas/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("atlas").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ATLAS_CONFIG` environment variable
/// 3. Default path `~/.config/atlas/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ATLAS_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_theme(value: &str) -> Result<ThemeMode, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: "theme",
        value: value.to_string(),
    })
}

fn parse_language(value: &str) -> Result<Language, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: "language",
        value: value.to_string(),
    })
}

/// A zero timeout makes every request fail before it is sent.
fn check_timeout(secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: "request_timeout_secs",
            value: secs.to_string(),
        });
    }
    Ok(secs)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unknown theme or language, or
/// a zero request timeout.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        theme: match config.theme {
            Some(theme) => parse_theme(&theme)?,
            None => defaults.theme,
        },
        language: match config.language {
            Some(language) => parse_language(&language)?,
            None => defaults.language,
        },
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        maps_api_key: config.maps_api_key.or(defaults.maps_api_key),
        request_timeout_secs: match config.request_timeout_secs {
            Some(secs) => check_timeout(secs)?,
            None => defaults.request_timeout_secs,
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ATLAS_THEME`: Override theme
/// - `ATLAS_LANGUAGE`: Override language
/// - `ATLAS_API_URL`: Override API base URL
/// - `ATLAS_MAPS_API_KEY`: Override map service key
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when `ATLAS_THEME` or `ATLAS_LANGUAGE`
/// holds an unknown value.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(theme) = std::env::var("ATLAS_THEME") {
        config.theme = parse_theme(&theme)?;
    }

    if let Ok(language) = std::env::var("ATLAS_LANGUAGE") {
        config.language = parse_language(&language)?;
    }

    if let Ok(url) = std::env::var("ATLAS_API_URL") {
        config.api_base_url = url;
    }

    if let Ok(key) = std::env::var("ATLAS_MAPS_API_KEY") {
        config.maps_api_key = Some(key);
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(theme) = overrides.theme {
        config.theme = theme;
    }

    if let Some(language) = overrides.language {
        config.language = language;
    }

    if let Some(url) = overrides.api_base_url {
        config.api_base_url = url;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
