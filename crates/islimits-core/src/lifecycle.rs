//! Island lifecycle handling.
//!
//! Decides, per event, which island's override record is recomputed or
//! cleared and whose capabilities feed it:
//!
//! | Event | Action |
//! |---|---|
//! | island created / reset / registered | recompute from the owner's capabilities |
//! | ownership transferred | clear, then recompute from the new owner's capabilities |
//! | island unregistered | clear |
//! | occupant joined | recompute each of the occupant's own islands from their capabilities |
//!
//! Recomputes need a connected identity: offline owners are skipped silently.
//! The controller keeps no state of its own; everything goes through the
//! ports. Events must be handled one at a time -- a recompute is a
//! read-modify-write against the store.
//!
//! A store failure on one island of a join becomes a `Failed` step; the
//! occupant's other islands are still recomputed.

use std::sync::Arc;

use islimits_types::error::LimitsError;
use islimits_types::event::{
    IslandProvisioned, IslandRef, IslandUnregistered, LimitsEvent, OccupantJoined,
    OwnershipTransferred,
};
use islimits_types::game_mode::GameMode;
use islimits_types::ids::{IslandId, Occupant, OccupantId};
use islimits_types::record::OverrideRecord;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::grammar::parse_capability_set;
use crate::merge::{MergeOutcome, merge_grants};
use crate::ports::{
    CapabilityProvider, Connectivity, DiagnosticsSink, GameModeRegistry, IslandDirectory,
    OverrideStore, ResourceResolver,
};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why an event led to no recompute or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The island's world is not managed by any game mode.
    UnmanagedWorld,
    /// The game mode has no display name or no capability prefix.
    IncompleteGameMode,
    /// The target occupant is not connected.
    OccupantOffline,
    /// The joining occupant has no island in any managed game mode.
    NoIsland,
}

/// What the controller did in response to one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LifecycleOutcome {
    Recomputed {
        island: IslandId,
        occupant: OccupantId,
        /// Whether the record was written back.
        changed: bool,
        accepted: usize,
        rejected: usize,
    },
    Cleared {
        island: IslandId,
        /// Number of limits dropped.
        removed: usize,
    },
    Skipped {
        reason: SkipReason,
    },
    /// A step that hit a store error. Remaining steps of the same event still
    /// ran.
    Failed {
        island: IslandId,
        error: String,
    },
    /// Several steps, in execution order (transfer, multi-game-mode join).
    Sequence {
        steps: Vec<LifecycleOutcome>,
    },
}

impl LifecycleOutcome {
    /// Number of store writes this outcome performed.
    pub fn writes(&self) -> usize {
        match self {
            LifecycleOutcome::Recomputed { changed, .. } => usize::from(*changed),
            LifecycleOutcome::Cleared { removed, .. } => usize::from(*removed > 0),
            LifecycleOutcome::Skipped { .. } | LifecycleOutcome::Failed { .. } => 0,
            LifecycleOutcome::Sequence { steps } => steps.iter().map(Self::writes).sum(),
        }
    }

    /// Number of failed steps.
    pub fn failures(&self) -> usize {
        match self {
            LifecycleOutcome::Failed { .. } => 1,
            LifecycleOutcome::Sequence { steps } => steps.iter().map(Self::failures).sum(),
            _ => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Handler interface
// ---------------------------------------------------------------------------

/// One handler per event kind, each taking the plain event record.
pub trait IslandLifecycleHandler {
    fn on_island_provisioned(&self, event: &IslandProvisioned)
    -> Result<LifecycleOutcome, LimitsError>;

    fn on_ownership_transferred(
        &self,
        event: &OwnershipTransferred,
    ) -> Result<LifecycleOutcome, LimitsError>;

    fn on_island_unregistered(&self, event: &IslandUnregistered)
    -> Result<LifecycleOutcome, LimitsError>;

    fn on_occupant_joined(&self, event: &OccupantJoined) -> Result<LifecycleOutcome, LimitsError>;
}

/// Route an event to the matching handler method.
pub fn dispatch<H: IslandLifecycleHandler + ?Sized>(
    handler: &H,
    event: &LimitsEvent,
) -> Result<LifecycleOutcome, LimitsError> {
    match event {
        LimitsEvent::IslandProvisioned(e) => handler.on_island_provisioned(e),
        LimitsEvent::OwnershipTransferred(e) => handler.on_ownership_transferred(e),
        LimitsEvent::IslandUnregistered(e) => handler.on_island_unregistered(e),
        LimitsEvent::OccupantJoined(e) => handler.on_occupant_joined(e),
    }
}

/// Dispatch events in order. A failing event is logged and does not stop the
/// ones after it.
pub fn dispatch_all<'a, H, I>(handler: &H, events: I) -> Vec<Result<LifecycleOutcome, LimitsError>>
where
    H: IslandLifecycleHandler + ?Sized,
    I: IntoIterator<Item = &'a LimitsEvent>,
{
    events
        .into_iter()
        .map(|event| {
            let result = dispatch(handler, event);
            if let Err(e) = &result {
                warn!(event = event.kind(), error = %e, "Failed to handle limits event");
            }
            result
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// The collaborators a [`LimitsController`] runs against.
#[derive(Clone)]
pub struct ControllerPorts {
    pub game_modes: Arc<dyn GameModeRegistry>,
    pub islands: Arc<dyn IslandDirectory>,
    pub connectivity: Arc<dyn Connectivity>,
    pub capabilities: Arc<dyn CapabilityProvider>,
    pub resolver: Arc<dyn ResourceResolver>,
    pub store: Arc<dyn OverrideStore>,
    pub diagnostics: Arc<dyn DiagnosticsSink>,
}

/// Keeps per-island override records in line with the capabilities of the
/// occupants they belong to.
pub struct LimitsController {
    ports: ControllerPorts,
}

impl LimitsController {
    pub fn new(ports: ControllerPorts) -> Self {
        Self { ports }
    }

    /// Recompute the record of `island` from the occupant's capabilities.
    ///
    /// Starts from the stored record (or an empty one), merges every valid
    /// grant and writes back only if something changed.
    pub fn recompute(
        &self,
        island: &IslandId,
        game_mode: &GameMode,
        occupant: &Occupant,
    ) -> Result<LifecycleOutcome, LimitsError> {
        let record = self
            .ports
            .store
            .get(island)?
            .unwrap_or_else(|| OverrideRecord::new(island.clone(), game_mode.name.clone()));

        let capabilities = self.ports.capabilities.effective_capabilities(occupant);
        let parsed = parse_capability_set(
            capabilities.as_slice(),
            &game_mode.limit_prefix(),
            self.ports.resolver.as_ref(),
        );
        parsed.report(&occupant.name, self.ports.diagnostics.as_ref());

        let MergeOutcome { record, changed } = merge_grants(record, &parsed.grants);
        if changed {
            self.ports.store.set(island, &record)?;
        }

        debug!(
            island = %island,
            occupant = %occupant.name,
            accepted = parsed.grants.len(),
            rejected = parsed.rejections.len(),
            changed,
            "Recomputed island limits"
        );

        Ok(LifecycleOutcome::Recomputed {
            island: island.clone(),
            occupant: occupant.id,
            changed,
            accepted: parsed.grants.len(),
            rejected: parsed.rejections.len(),
        })
    }

    /// Drop every limit of an island in a managed world. The record itself is
    /// kept; an absent or already empty record is left alone.
    pub fn clear(&self, island: &IslandRef) -> Result<LifecycleOutcome, LimitsError> {
        if self.ports.game_modes.game_mode_for_world(&island.world).is_none() {
            return Ok(skipped(SkipReason::UnmanagedWorld));
        }

        let mut removed = 0;
        if let Some(mut record) = self.ports.store.get(&island.id)? {
            removed = record.len();
            if removed > 0 {
                record.clear();
                self.ports.store.set(&island.id, &record)?;
                info!(island = %island.id, removed, "Cleared island limits");
            }
        }

        Ok(LifecycleOutcome::Cleared {
            island: island.id.clone(),
            removed,
        })
    }

    /// Recompute an island's record for its owner, if the island is managed
    /// and the owner is connected.
    fn recompute_for_owner(
        &self,
        island: &IslandRef,
        owner: &OccupantId,
    ) -> Result<LifecycleOutcome, LimitsError> {
        let Some(game_mode) = self.ports.game_modes.game_mode_for_world(&island.world) else {
            return Ok(skipped(SkipReason::UnmanagedWorld));
        };

        let Some(occupant) = self.connected(owner) else {
            debug!(island = %island.id, owner = %owner, "Owner offline, skipping recompute");
            return Ok(skipped(SkipReason::OccupantOffline));
        };

        if !game_mode.is_complete() {
            return Ok(skipped(SkipReason::IncompleteGameMode));
        }

        self.recompute(&island.id, game_mode, &occupant)
    }

    fn connected(&self, occupant: &OccupantId) -> Option<Occupant> {
        if !self.ports.connectivity.is_connected(occupant) {
            return None;
        }
        self.ports.connectivity.current_identity(occupant)
    }
}

impl IslandLifecycleHandler for LimitsController {
    #[instrument(skip(self, event), fields(island = %event.island.id, reason = ?event.reason))]
    fn on_island_provisioned(
        &self,
        event: &IslandProvisioned,
    ) -> Result<LifecycleOutcome, LimitsError> {
        self.recompute_for_owner(&event.island, &event.owner)
    }

    #[instrument(skip(self, event), fields(island = %event.island.id, new_owner = %event.new_owner))]
    fn on_ownership_transferred(
        &self,
        event: &OwnershipTransferred,
    ) -> Result<LifecycleOutcome, LimitsError> {
        let cleared = self.clear(&event.island)?;
        if matches!(cleared, LifecycleOutcome::Skipped { .. }) {
            return Ok(cleared);
        }
        let recomputed = self.recompute_for_owner(&event.island, &event.new_owner)?;
        Ok(LifecycleOutcome::Sequence {
            steps: vec![cleared, recomputed],
        })
    }

    #[instrument(skip(self, event), fields(island = %event.island.id))]
    fn on_island_unregistered(
        &self,
        event: &IslandUnregistered,
    ) -> Result<LifecycleOutcome, LimitsError> {
        self.clear(&event.island)
    }

    #[instrument(skip(self, event), fields(occupant = %event.occupant.name))]
    fn on_occupant_joined(&self, event: &OccupantJoined) -> Result<LifecycleOutcome, LimitsError> {
        let mut steps = Vec::new();
        for game_mode in self.ports.game_modes.game_modes() {
            let Some(world) = game_mode.overworld() else {
                continue;
            };
            let Some(island) = self.ports.islands.island_of(world, &event.occupant.id) else {
                continue;
            };
            match self.recompute(&island, game_mode, &event.occupant) {
                Ok(step) => steps.push(step),
                Err(e) => {
                    warn!(
                        island = %island,
                        game_mode = %game_mode.name,
                        error = %e,
                        "Failed to recompute island limits on join"
                    );
                    steps.push(LifecycleOutcome::Failed {
                        island,
                        error: e.to_string(),
                    });
                }
            }
        }

        if steps.is_empty() {
            return Ok(skipped(SkipReason::NoIsland));
        }
        Ok(LifecycleOutcome::Sequence { steps })
    }
}

fn skipped(reason: SkipReason) -> LifecycleOutcome {
    LifecycleOutcome::Skipped { reason }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
