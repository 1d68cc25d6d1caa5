//! Application state shared by the CLI commands.
//!
//! Loads the configuration once and pins the configured registries to the
//! concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use islimits_infra::catalog::ResourceCatalog;
use islimits_infra::config::{load_config, load_config_file, resolve_data_dir};
use islimits_infra::game_modes::ConfiguredGameModes;
use islimits_types::config::LimitsConfig;
use islimits_types::game_mode::GameMode;

pub struct AppState {
    pub config: LimitsConfig,
    pub catalog: Arc<ResourceCatalog>,
    pub game_modes: Arc<ConfiguredGameModes>,
}

impl AppState {
    /// Load configuration from `config_path`, or from `{data_dir}/config.toml`.
    pub fn init(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);

        let config = match config_path {
            Some(path) => load_config_file(path),
            None => load_config(&data_dir),
        }
        .context("failed to load configuration")?;

        let state = Self::from_config(config);
        tracing::debug!(
            data_dir = %data_dir.display(),
            game_modes = state.config.game_modes.len(),
            materials = state.catalog.material_count(),
            entities = state.catalog.entity_count(),
            "Loaded configuration"
        );

        Ok(state)
    }

    pub fn from_config(config: LimitsConfig) -> Self {
        let catalog = Arc::new(ResourceCatalog::from_config(&config.catalog));
        let game_modes = Arc::new(ConfiguredGameModes::new(config.game_modes.clone()));
        Self {
            config,
            catalog,
            game_modes,
        }
    }

    /// Look up a configured game mode by name (case-insensitive).
    pub fn game_mode(&self, name: &str) -> Option<&GameMode> {
        self.config
            .game_modes
            .iter()
            .find(|gm| gm.name.eq_ignore_ascii_case(name))
    }
}
