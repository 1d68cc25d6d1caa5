//! Game-mode registry backed by the configured game-mode table.

use islimits_core::ports::GameModeRegistry;
use islimits_types::game_mode::GameMode;

#[derive(Debug, Clone, Default)]
pub struct ConfiguredGameModes {
    game_modes: Vec<GameMode>,
}

impl ConfiguredGameModes {
    pub fn new(game_modes: Vec<GameMode>) -> Self {
        Self { game_modes }
    }
}

impl GameModeRegistry for ConfiguredGameModes {
    fn game_modes(&self) -> &[GameMode] {
        &self.game_modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use islimits_types::ids::WorldId;

    #[test]
    fn world_lookup_finds_owning_game_mode() {
        let registry = ConfiguredGameModes::new(vec![
            GameMode::new("BSkyBlock", "bskyblock.", vec![WorldId::new("bskyblock_world")]),
            GameMode::new("AcidIsland", "acidisland.", vec![WorldId::new("acidisland_world")]),
        ]);

        let gm = registry
            .game_mode_for_world(&WorldId::new("acidisland_world"))
            .unwrap();
        assert_eq!(gm.name, "AcidIsland");
        assert!(registry.game_mode_for_world(&WorldId::new("lobby")).is_none());
    }
}
