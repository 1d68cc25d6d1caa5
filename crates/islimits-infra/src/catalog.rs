//! Resource catalog built from the `[catalog]` section of the configuration.

use std::collections::{HashMap, HashSet};

use islimits_core::ports::ResourceResolver;
use islimits_types::config::CatalogConfig;
use islimits_types::resource::{EntityTypeId, ITEM_FRAME, MaterialId, PAINTING};

/// Registry of block materials and entity types known to the simulation.
///
/// Keys are stored upper-case. Paintings and item frames are always present
/// as (non-spawnable) entity types.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    materials: HashSet<String>,
    /// Entity key -> spawnable.
    entities: HashMap<String, bool>,
    disallowed: HashSet<String>,
}

impl ResourceCatalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut entities: HashMap<String, bool> = [PAINTING, ITEM_FRAME]
            .into_iter()
            .map(|key| (key.to_string(), false))
            .collect();
        entities.extend(
            config
                .entities
                .iter()
                .map(|e| (e.name.to_ascii_uppercase(), e.spawnable)),
        );

        Self {
            materials: config
                .materials
                .iter()
                .map(|m| m.to_ascii_uppercase())
                .collect(),
            entities,
            disallowed: config
                .disallowed_entities
                .iter()
                .map(|e| e.to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl ResourceResolver for ResourceCatalog {
    fn resolve_block(&self, key: &str) -> Option<MaterialId> {
        self.materials.contains(key).then(|| MaterialId::new(key))
    }

    fn resolve_entity(&self, key: &str) -> Option<EntityTypeId> {
        self.entities.contains_key(key).then(|| EntityTypeId::new(key))
    }

    fn is_spawnable(&self, entity: &EntityTypeId) -> bool {
        self.entities.get(entity.as_str()).copied().unwrap_or(false)
    }

    fn is_disallowed(&self, entity: &EntityTypeId) -> bool {
        self.disallowed.contains(entity.as_str())
    }
}
