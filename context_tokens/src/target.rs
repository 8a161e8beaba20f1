//! Resolution of `farm`/`player` targets to their mod data stores.

use game_world::{HostState, ModData, ScreenId};

/// A symbolic reference to an object that carries mod data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The primary world location.
    Farm,
    /// The player active on the current screen.
    Player,
}

impl Target {
    /// Human-readable list of accepted target names, for error messages.
    pub const EXPECTED: &'static str = "Farm, Player";

    /// Parse a target name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("farm") {
            Some(Target::Farm)
        } else if name.eq_ignore_ascii_case("player") {
            Some(Target::Player)
        } else {
            None
        }
    }

    /// The canonical (lower-case) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Farm => "farm",
            Target::Player => "player",
        }
    }

    /// Find the target's mod data for a screen.
    ///
    /// Prefers the loaded world; while a save is loading, falls back to the
    /// partially loaded save data. Returns `None` if anything along the way
    /// doesn't exist yet.
    pub fn resolve<'a>(&self, host: &'a HostState, screen: ScreenId) -> Option<&'a ModData> {
        if let Some(world) = host.ready_world() {
            return match self {
                Target::Farm => world.farm()?.mod_data.as_ref(),
                Target::Player => world.player_for(screen)?.mod_data.as_ref(),
            };
        }

        let snapshot = host.loading.as_ref()?;
        match self {
            Target::Farm => snapshot.farm()?.mod_data.as_ref(),
            // the save has a single player until the world is built
            Target::Player => snapshot.player.as_ref()?.mod_data.as_ref(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether every target's mod data can be queried.
///
/// True once the world is ready, or mid-load once both the player's and the
/// farm's mod data stores exist.
pub fn mod_data_available(host: &HostState) -> bool {
    if host.is_world_ready() {
        return true;
    }

    let Some(snapshot) = host.loading.as_ref() else {
        return false;
    };

    let player_ready = snapshot
        .player
        .as_ref()
        .is_some_and(|player| player.mod_data.is_some());
    let farm_ready = snapshot
        .farm()
        .is_some_and(|farm| farm.mod_data.is_some());

    player_ready && farm_ready
}
