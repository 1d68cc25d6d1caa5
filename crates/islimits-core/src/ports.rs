//! Collaborator trait definitions (ports).
//!
//! These traits define everything the lifecycle controller needs from the
//! surrounding simulation. Implementations live in islimits-infra; the core
//! crate never depends on a concrete store, registry or event source.
//!
//! All calls are synchronous and the traits are object safe so the controller
//! can hold them as `Arc<dyn ...>`.

use islimits_types::error::{RejectReason, StoreError};
use islimits_types::game_mode::GameMode;
use islimits_types::ids::{IslandId, Occupant, OccupantId, WorldId};
use islimits_types::record::OverrideRecord;
use islimits_types::resource::{EntityTypeId, MaterialId};

/// Enumerates the capabilities effectively granted to a connected occupant.
pub trait CapabilityProvider: Send + Sync {
    /// Every capability string the occupant currently holds. Queried once
    /// per recompute.
    fn effective_capabilities(&self, occupant: &Occupant) -> Vec<String>;
}

/// Resolves upper-case resource keys against the resource registry.
pub trait ResourceResolver: Send + Sync {
    /// Resolve a block material key.
    fn resolve_block(&self, key: &str) -> Option<MaterialId>;

    /// Resolve an entity type key.
    fn resolve_entity(&self, key: &str) -> Option<EntityTypeId>;

    /// Whether the entity type can be spawned at all.
    fn is_spawnable(&self, entity: &EntityTypeId) -> bool;

    /// Whether the entity type is explicitly excluded from limits.
    fn is_disallowed(&self, entity: &EntityTypeId) -> bool;

    /// Whether a limit may be set for this entity type.
    ///
    /// Paintings and item frames always qualify; any other type must be
    /// spawnable and not disallowed.
    fn is_eligible(&self, entity: &EntityTypeId) -> bool {
        entity.is_hanging_exception() || (self.is_spawnable(entity) && !self.is_disallowed(entity))
    }
}

/// Storage for per-island override records.
pub trait OverrideStore: Send + Sync {
    /// Get the record of an island, if one has been stored.
    fn get(&self, island: &IslandId) -> Result<Option<OverrideRecord>, StoreError>;

    /// Store the record of an island (upsert).
    fn set(&self, island: &IslandId, record: &OverrideRecord) -> Result<(), StoreError>;
}

/// Tells which occupants are currently connected.
pub trait Connectivity: Send + Sync {
    fn is_connected(&self, occupant: &OccupantId) -> bool;

    /// The connected identity of an occupant, or `None` when offline or
    /// unknown.
    fn current_identity(&self, occupant: &OccupantId) -> Option<Occupant>;
}

/// Registry of managed game modes.
pub trait GameModeRegistry: Send + Sync {
    fn game_modes(&self) -> &[GameMode];

    /// The game mode managing `world`, if any. A world with no game mode is
    /// not managed and its islands carry no override records.
    fn game_mode_for_world(&self, world: &WorldId) -> Option<&GameMode> {
        self.game_modes().iter().find(|gm| gm.manages(world))
    }
}

/// Looks up which island an occupant belongs to in a world.
pub trait IslandDirectory: Send + Sync {
    fn island_of(&self, world: &WorldId, occupant: &OccupantId) -> Option<IslandId>;
}

/// Receives capability strings that were rejected. Fire-and-forget.
pub trait DiagnosticsSink: Send + Sync {
    fn log_rejection(&self, occupant_name: &str, raw: &str, reason: &RejectReason);
}
