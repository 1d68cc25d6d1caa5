//! Configuration types.
//!
//! `LimitsConfig` represents the top-level `config.toml`: the managed game
//! modes and the resource catalog used to resolve capability keys.

use serde::{Deserialize, Serialize};

use crate::game_mode::GameMode;

/// Top-level configuration.
///
/// Loaded from `~/.islimits/config.toml`. All fields have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Game modes whose worlds are managed.
    #[serde(default)]
    pub game_modes: Vec<GameMode>,

    /// Names of the block materials and entity types that limits may target.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// The resource registry as configured on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Block material keys (e.g. "STONE").
    #[serde(default)]
    pub materials: Vec<String>,

    /// Entity types and whether they can be spawned.
    #[serde(default)]
    pub entities: Vec<EntityEntry>,

    /// Entity types that resolve but may never carry a limit.
    #[serde(default)]
    pub disallowed_entities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEntry {
    pub name: String,
    #[serde(default = "default_spawnable")]
    pub spawnable: bool,
}

fn default_spawnable() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LimitsConfig = toml::from_str("").unwrap();
        assert!(config.game_modes.is_empty());
        assert!(config.catalog.materials.is_empty());
        assert!(config.catalog.entities.is_empty());
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
[[game_modes]]
name = "BSkyBlock"
permission_prefix = "bskyblock."
worlds = ["bskyblock_world", "bskyblock_world_nether"]

[[game_modes]]
name = "AcidIsland"
permission_prefix = "acidisland."
worlds = ["acidisland_world"]

[catalog]
materials = ["STONE", "HOPPER"]
disallowed_entities = ["ENDER_DRAGON"]

[[catalog.entities]]
name = "COW"

[[catalog.entities]]
name = "LIGHTNING"
spawnable = false
"#;
        let config: LimitsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game_modes.len(), 2);
        assert_eq!(config.game_modes[0].limit_prefix(), "bskyblock.island.limit.");
        assert_eq!(config.game_modes[1].worlds.len(), 1);
        assert_eq!(config.catalog.materials, vec!["STONE", "HOPPER"]);
        assert!(config.catalog.entities[0].spawnable);
        assert!(!config.catalog.entities[1].spawnable);
        assert_eq!(config.catalog.disallowed_entities, vec!["ENDER_DRAGON"]);
    }
}
