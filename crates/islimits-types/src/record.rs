//! Per-island override record.
//!
//! Holds the effective ceiling per resource kind derived from the capabilities
//! of the island's relevant occupant. Blocks and entities are stored in two
//! maps so the record serializes with plain string keys; the accessors below
//! expose them as a single `ResourceKind -> u32` mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::IslandId;
use crate::resource::{EntityTypeId, MaterialId, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub island_id: IslandId,
    /// Display name of the game mode the island belongs to.
    pub game_mode: String,
    #[serde(default)]
    pub block_limits: BTreeMap<MaterialId, u32>,
    #[serde(default)]
    pub entity_limits: BTreeMap<EntityTypeId, u32>,
}

impl OverrideRecord {
    /// Create an empty record for an island.
    pub fn new(island_id: IslandId, game_mode: impl Into<String>) -> Self {
        Self {
            island_id,
            game_mode: game_mode.into(),
            block_limits: BTreeMap::new(),
            entity_limits: BTreeMap::new(),
        }
    }

    /// Current limit for a resource, if one has been granted.
    pub fn limit(&self, resource: &ResourceKind) -> Option<u32> {
        match resource {
            ResourceKind::Block(m) => self.block_limits.get(m).copied(),
            ResourceKind::Entity(e) => self.entity_limits.get(e).copied(),
        }
    }

    /// Overwrite the limit for a resource, returning the previous value.
    pub fn set_limit(&mut self, resource: ResourceKind, limit: u32) -> Option<u32> {
        match resource {
            ResourceKind::Block(m) => self.block_limits.insert(m, limit),
            ResourceKind::Entity(e) => self.entity_limits.insert(e, limit),
        }
    }

    /// All limits, blocks first, each group ordered by key.
    pub fn limits(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        let blocks = self
            .block_limits
            .iter()
            .map(|(m, v)| (ResourceKind::Block(m.clone()), *v));
        let entities = self
            .entity_limits
            .iter()
            .map(|(e, v)| (ResourceKind::Entity(e.clone()), *v));
        blocks.chain(entities)
    }

    pub fn len(&self) -> usize {
        self.block_limits.len() + self.entity_limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block_limits.is_empty() && self.entity_limits.is_empty()
    }

    /// Drop every limit. The record itself (island, game mode) is kept.
    pub fn clear(&mut self) {
        self.block_limits.clear();
        self.entity_limits.clear();
    }
}
