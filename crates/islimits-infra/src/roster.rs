//! Occupant roster: who is connected and which capabilities they hold.

use dashmap::DashMap;
use islimits_core::ports::{CapabilityProvider, Connectivity};
use islimits_types::ids::{Occupant, OccupantId};

#[derive(Debug, Clone)]
struct RosterEntry {
    occupant: Occupant,
    online: bool,
    capabilities: Vec<String>,
}

/// In-memory roster of known occupants.
///
/// Implements both [`Connectivity`] and [`CapabilityProvider`]: offline
/// occupants keep their capabilities but have no current identity.
#[derive(Debug, Default)]
pub struct SessionRoster {
    entries: DashMap<OccupantId, RosterEntry>,
}

impl SessionRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an occupant, replacing any previous entry with the same id.
    pub fn register(&self, occupant: Occupant, online: bool, capabilities: Vec<String>) {
        self.entries.insert(
            occupant.id,
            RosterEntry {
                occupant,
                online,
                capabilities,
            },
        );
    }

    /// Mark an occupant as connected. Returns `false` if unknown.
    pub fn connect(&self, occupant: &OccupantId) -> bool {
        match self.entries.get_mut(occupant) {
            Some(mut entry) => {
                entry.online = true;
                true
            }
            None => false,
        }
    }
}

impl Connectivity for SessionRoster {
    fn is_connected(&self, occupant: &OccupantId) -> bool {
        self.entries.get(occupant).is_some_and(|e| e.online)
    }

    fn current_identity(&self, occupant: &OccupantId) -> Option<Occupant> {
        self.entries
            .get(occupant)
            .filter(|e| e.online)
            .map(|e| e.occupant.clone())
    }
}

impl CapabilityProvider for SessionRoster {
    fn effective_capabilities(&self, occupant: &Occupant) -> Vec<String> {
        self.entries
            .get(&occupant.id)
            .map(|e| e.capabilities.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Occupant {
        Occupant::new(OccupantId::new(), "alice")
    }

    #[test]
    fn offline_occupant_has_no_identity() {
        let roster = SessionRoster::new();
        let a = alice();
        roster.register(a.clone(), false, vec![]);

        assert!(!roster.is_connected(&a.id));
        assert!(roster.current_identity(&a.id).is_none());
    }

    #[test]
    fn connect_brings_identity_online() {
        let roster = SessionRoster::new();
        let a = alice();
        roster.register(a.clone(), false, vec![]);

        assert!(roster.connect(&a.id));
        assert!(roster.is_connected(&a.id));
        assert_eq!(roster.current_identity(&a.id), Some(a));
    }

    #[test]
    fn unknown_occupant_cannot_connect() {
        let roster = SessionRoster::new();
        let id = OccupantId::new();
        assert!(!roster.connect(&id));
        assert!(!roster.is_connected(&id));
    }

    #[test]
    fn offline_occupant_keeps_capabilities() {
        let roster = SessionRoster::new();
        let a = alice();
        roster.register(a.clone(), false, vec!["bskyblock.island.limit.STONE.8".to_string()]);

        assert_eq!(
            roster.effective_capabilities(&a),
            vec!["bskyblock.island.limit.STONE.8".to_string()]
        );
    }

    #[test]
    fn register_replaces_previous_entry() {
        let roster = SessionRoster::new();
        let a = alice();
        roster.register(a.clone(), true, vec!["bskyblock.island.limit.STONE.8".to_string()]);
        roster.register(a.clone(), false, vec![]);

        assert!(!roster.is_connected(&a.id));
        assert!(roster.effective_capabilities(&a).is_empty());
    }
}
