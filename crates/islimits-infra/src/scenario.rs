//! Replay scenarios.
//!
//! A scenario is a TOML file describing occupants, island memberships and an
//! ordered list of lifecycle events. It drives the `islimits replay` command
//! and doubles as a fixture format for end-to-end checks.
//!
//! ```toml
//! [[occupants]]
//! id = "0190f5d2-7c1e-7a8b-9d3e-4f5a6b7c8d9e"
//! name = "alice"
//! online = true
//! capabilities = ["bskyblock.island.limit.HOPPER.20"]
//!
//! [[islands]]
//! id = "isl-1"
//! world = "bskyblock_world"
//! owner = "0190f5d2-7c1e-7a8b-9d3e-4f5a6b7c8d9e"
//!
//! [[events]]
//! type = "island_provisioned"
//! island = { id = "isl-1", world = "bskyblock_world" }
//! owner = "0190f5d2-7c1e-7a8b-9d3e-4f5a6b7c8d9e"
//! reason = "created"
//! ```

use std::path::Path;

use islimits_types::error::ConfigError;
use islimits_types::event::LimitsEvent;
use islimits_types::ids::{IslandId, Occupant, OccupantId, WorldId};
use serde::{Deserialize, Serialize};

use crate::islands::IslandRegistry;
use crate::roster::SessionRoster;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub occupants: Vec<ScenarioOccupant>,
    #[serde(default)]
    pub islands: Vec<ScenarioIsland>,
    #[serde(default)]
    pub events: Vec<LimitsEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOccupant {
    pub id: OccupantId,
    pub name: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioIsland {
    pub id: IslandId,
    pub world: WorldId,
    #[serde(default)]
    pub owner: Option<OccupantId>,
    /// Team members other than the owner.
    #[serde(default)]
    pub members: Vec<OccupantId>,
}

impl Scenario {
    /// Register every occupant and island membership of the scenario.
    pub fn populate(&self, roster: &SessionRoster, islands: &IslandRegistry) {
        for o in &self.occupants {
            roster.register(
                Occupant::new(o.id, o.name.clone()),
                o.online,
                o.capabilities.clone(),
            );
        }
        for island in &self.islands {
            for occupant in island.owner.iter().chain(&island.members) {
                islands.assign(island.world.clone(), *occupant, island.id.clone());
            }
        }
    }
}

/// Load a scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
