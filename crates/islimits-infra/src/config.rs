//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.islimits/` in production)
//! and deserializes it into [`LimitsConfig`]. A missing file means defaults; a
//! file that exists but does not parse is an error.

use std::path::{Path, PathBuf};

use islimits_types::config::LimitsConfig;
use islimits_types::error::ConfigError;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory.
///
/// Priority:
/// 1. `ISLIMITS_DATA_DIR` environment variable
/// 2. `~/.islimits`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ISLIMITS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".islimits");
    }

    // Last resort: current directory
    PathBuf::from(".islimits")
}

/// Load `{data_dir}/config.toml`, or defaults when it does not exist.
pub fn load_config(data_dir: &Path) -> Result<LimitsConfig, ConfigError> {
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        tracing::debug!("No {CONFIG_FILE} found at {}, using defaults", config_path.display());
        return Ok(LimitsConfig::default());
    }
    load_config_file(&config_path)
}

/// Load a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<LimitsConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: LimitsConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    for game_mode in config.game_modes.iter().filter(|gm| !gm.is_complete()) {
        tracing::warn!(
            "Game mode '{}' has no name or permission prefix; owner limits will not be applied",
            game_mode.name
        );
    }

    Ok(config)
}
