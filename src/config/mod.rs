//! Configuration module.
//!
//! Precedence chain: defaults → config file → environment → CLI flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Resolve the full configuration: file (by precedence), environment, then CLI.
///
/// # Errors
///
/// Returns `ConfigError` if a config file exists but cannot be read or parsed,
/// or if any source holds an unknown theme or language.
pub fn resolve(
    config_path: Option<std::path::PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    let with_env = apply_env_overrides(merged)?;
    Ok(apply_cli_overrides(with_env, cli))
}
