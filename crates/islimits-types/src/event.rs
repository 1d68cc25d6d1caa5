//! Lifecycle events consumed by the limits controller.
//!
//! Each event kind is a plain data record. `LimitsEvent` wraps them in one
//! tagged enum so an event source (or a replayed scenario file) can deliver
//! them through a single channel.

use serde::{Deserialize, Serialize};

use crate::ids::{IslandId, Occupant, OccupantId, WorldId};

/// The island an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandRef {
    pub id: IslandId,
    pub world: WorldId,
}

impl IslandRef {
    pub fn new(id: IslandId, world: WorldId) -> Self {
        Self { id, world }
    }
}

/// Why an island came (back) into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionReason {
    Created,
    Reset,
    Registered,
}

/// An island was created, reset, or registered to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandProvisioned {
    pub island: IslandRef,
    pub owner: OccupantId,
    pub reason: ProvisionReason,
}

/// Ownership of an island moved to a new owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipTransferred {
    pub island: IslandRef,
    #[serde(default)]
    pub old_owner: Option<OccupantId>,
    pub new_owner: OccupantId,
}

/// An island was unregistered from its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandUnregistered {
    pub island: IslandRef,
}

/// An occupant connected to the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantJoined {
    pub occupant: Occupant,
}

/// Every event the limits controller handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LimitsEvent {
    IslandProvisioned(IslandProvisioned),
    OwnershipTransferred(OwnershipTransferred),
    IslandUnregistered(IslandUnregistered),
    OccupantJoined(OccupantJoined),
}

impl LimitsEvent {
    /// Short name of the event kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LimitsEvent::IslandProvisioned(_) => "island_provisioned",
            LimitsEvent::OwnershipTransferred(_) => "ownership_transferred",
            LimitsEvent::IslandUnregistered(_) => "island_unregistered",
            LimitsEvent::OccupantJoined(_) => "occupant_joined",
        }
    }
}
