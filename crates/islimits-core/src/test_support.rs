//! In-memory port implementations for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use islimits_types::error::StoreError;
use islimits_types::game_mode::GameMode;
use islimits_types::ids::{IslandId, Occupant, OccupantId, WorldId};
use islimits_types::record::OverrideRecord;
use islimits_types::resource::{EntityTypeId, MaterialId};

use crate::ports::{
    CapabilityProvider, Connectivity, GameModeRegistry, IslandDirectory, OverrideStore,
    ResourceResolver,
};

#[derive(Default)]
pub struct FakeResolver {
    blocks: HashSet<String>,
    entities: HashMap<String, bool>,
    disallowed: HashSet<String>,
}

impl FakeResolver {
    pub fn with_block(mut self, key: &str) -> Self {
        self.blocks.insert(key.to_string());
        self
    }

    pub fn with_entity(mut self, key: &str, spawnable: bool) -> Self {
        self.entities.insert(key.to_string(), spawnable);
        self
    }

    pub fn disallow(mut self, key: &str) -> Self {
        self.disallowed.insert(key.to_string());
        self
    }

    /// A small catalog shared by most tests.
    pub fn standard() -> Self {
        Self::default()
            .with_block("STONE")
            .with_block("HOPPER")
            .with_entity("COW", true)
            .with_entity("PAINTING", false)
            .with_entity("LIGHTNING", false)
            .with_entity("WITHER", true)
            .disallow("WITHER")
    }
}

impl ResourceResolver for FakeResolver {
    fn resolve_block(&self, key: &str) -> Option<MaterialId> {
        self.blocks.contains(key).then(|| MaterialId::new(key))
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

/// Store that counts writes so tests can assert on them. Islands marked
/// with `fail_for` make every call for them fail.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<IslandId, OverrideRecord>>,
    failing: Mutex<HashSet<IslandId>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn insert(&self, record: OverrideRecord) {
        self.records
            .lock()
            .unwrap()
            .insert(record.island_id.clone(), record);
    }

    pub fn record(&self, island: &str) -> Option<OverrideRecord> {
        self.records.lock().unwrap().get(&IslandId::new(island)).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_for(&self, island: &str) {
        self.failing.lock().unwrap().insert(IslandId::new(island));
    }

    fn check(&self, island: &IslandId) -> Result<(), StoreError> {
        if self.failing.lock().unwrap().contains(island) {
            return Err(StoreError::Unavailable(format!("{island} is unreadable")));
        }
        Ok(())
    }
}

impl OverrideStore for MemoryStore {
    fn get(&self, island: &IslandId) -> Result<Option<OverrideRecord>, StoreError> {
        self.check(island)?;
        Ok(self.records.lock().unwrap().get(island).cloned())
    }

    fn set(&self, island: &IslandId, record: &OverrideRecord) -> Result<(), StoreError> {
        self.check(island)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .insert(island.clone(), record.clone());
        Ok(())
    }
}

/// Store whose every call fails.
pub struct BrokenStore;

impl OverrideStore for BrokenStore {
    fn get(&self, _island: &IslandId) -> Result<Option<OverrideRecord>, StoreError> {
        Err(StoreError::Unavailable("broken".to_string()))
    }

    fn set(&self, _island: &IslandId, _record: &OverrideRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("broken".to_string()))
    }
}

struct RosterEntry {
    occupant: Occupant,
    online: bool,
    capabilities: Vec<String>,
}

/// Connectivity and capabilities of a fixed set of occupants.
#[derive(Default)]
pub struct Roster {
    entries: Mutex<HashMap<OccupantId, RosterEntry>>,
}

impl Roster {
    pub fn add(&self, name: &str, online: bool, capabilities: &[&str]) -> Occupant {
        let occupant = Occupant::new(OccupantId::new(), name);
        self.entries.lock().unwrap().insert(
            occupant.id,
            RosterEntry {
                occupant: occupant.clone(),
                online,
                capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            },
        );
        occupant
    }
}

impl Connectivity for Roster {
    fn is_connected(&self, occupant: &OccupantId) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(occupant)
            .is_some_and(|e| e.online)
    }

    fn current_identity(&self, occupant: &OccupantId) -> Option<Occupant> {
        self.entries
            .lock()
            .unwrap()
            .get(occupant)
            .filter(|e| e.online)
            .map(|e| e.occupant.clone())
    }
}

impl CapabilityProvider for Roster {
    fn effective_capabilities(&self, occupant: &Occupant) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .get(&occupant.id)
            .map(|e| e.capabilities.clone())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct Islands {
    members: Mutex<HashMap<(WorldId, OccupantId), IslandId>>,
}

impl Islands {
    pub fn assign(&self, world: &str, occupant: &Occupant, island: &str) {
        self.members
            .lock()
            .unwrap()
            .insert((WorldId::new(world), occupant.id), IslandId::new(island));
    }
}

impl IslandDirectory for Islands {
    fn island_of(&self, world: &WorldId, occupant: &OccupantId) -> Option<IslandId> {
        self.members
            .lock()
            .unwrap()
            .get(&(world.clone(), *occupant))
            .cloned()
    }
}

pub struct GameModes(pub Vec<GameMode>);

impl GameModeRegistry for GameModes {
    fn game_modes(&self) -> &[GameMode] {
        &self.0
    }
}

pub fn bskyblock() -> GameMode {
    GameMode::new(
        "BSkyBlock",
        "bskyblock.",
        vec![
            WorldId::new("bskyblock_world"),
            WorldId::new("bskyblock_world_nether"),
        ],
    )
}

pub fn acidisland() -> GameMode {
    GameMode::new("AcidIsland", "acidisland.", vec![WorldId::new("acidisland_world")])
}
