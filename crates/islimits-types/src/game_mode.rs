//! Game modes: world variants with their own capability namespace.

use serde::{Deserialize, Serialize};

use crate::ids::WorldId;

/// Appended to a game mode's permission prefix to form the namespace of
/// limit capabilities (`bskyblock.` + `island.limit.`).
pub const LIMIT_PERMISSION_SUFFIX: &str = "island.limit.";

/// A managed game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    /// Display name, recorded on every override record of this game mode.
    pub name: String,
    /// Capability prefix, including its trailing dot (e.g. `bskyblock.`).
    pub permission_prefix: String,
    /// Worlds managed by this game mode. The first entry is the overworld,
    /// the world in which occupants own their island.
    #[serde(default)]
    pub worlds: Vec<WorldId>,
}

impl GameMode {
    pub fn new(
        name: impl Into<String>,
        permission_prefix: impl Into<String>,
        worlds: Vec<WorldId>,
    ) -> Self {
        Self {
            name: name.into(),
            permission_prefix: permission_prefix.into(),
            worlds,
        }
    }

    /// Full prefix that limit capabilities of this game mode start with.
    pub fn limit_prefix(&self) -> String {
        format!("{}{}", self.permission_prefix, LIMIT_PERMISSION_SUFFIX)
    }

    pub fn overworld(&self) -> Option<&WorldId> {
        self.worlds.first()
    }

    pub fn manages(&self, world: &WorldId) -> bool {
        self.worlds.contains(world)
    }

    /// Whether both the display name and the capability prefix are set.
    /// Owner recomputes are skipped for game modes missing either.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.permission_prefix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bskyblock() -> GameMode {
        GameMode::new(
            "BSkyBlock",
            "bskyblock.",
            vec![WorldId::new("bskyblock_world"), WorldId::new("bskyblock_world_nether")],
        )
    }

    #[test]
    fn limit_prefix_appends_suffix() {
        assert_eq!(bskyblock().limit_prefix(), "bskyblock.island.limit.");
    }

    #[test]
    fn overworld_is_first_world() {
        assert_eq!(bskyblock().overworld(), Some(&WorldId::new("bskyblock_world")));
    }

    #[test]
    fn manages_every_listed_world() {
        let gm = bskyblock();
        assert!(gm.manages(&WorldId::new("bskyblock_world_nether")));
        assert!(!gm.manages(&WorldId::new("acidisland_world")));
    }

    #[test]
    fn incomplete_without_prefix() {
        let gm = GameMode::new("Broken", "", vec![]);
        assert!(!gm.is_complete());
        assert!(bskyblock().is_complete());
    }
}
