//! Island membership registry.

use dashmap::DashMap;
use islimits_core::ports::IslandDirectory;
use islimits_types::ids::{IslandId, OccupantId, WorldId};

/// Maps (world, occupant) to the island the occupant belongs to in that
/// world. Owners and team members are both recorded here.
#[derive(Debug, Default)]
pub struct IslandRegistry {
    members: DashMap<(WorldId, OccupantId), IslandId>,
}

impl IslandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `occupant` belongs to `island` in `world`. Returns the
    /// island they belonged to before, if any.
    pub fn assign(&self, world: WorldId, occupant: OccupantId, island: IslandId) -> Option<IslandId> {
        self.members.insert((world, occupant), island)
    }

    /// Remove every membership of an island.
    pub fn remove_island(&self, island: &IslandId) -> usize {
        let before = self.members.len();
        self.members.retain(|_, member_of| *member_of != *island);
        before - self.members.len()
    }
}

impl IslandDirectory for IslandRegistry {
    fn island_of(&self, world: &WorldId, occupant: &OccupantId) -> Option<IslandId> {
        self.members
            .get(&(world.clone(), *occupant))
            .map(|island| island.value().clone())
    }
}
