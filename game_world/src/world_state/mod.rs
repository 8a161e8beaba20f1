//! World state management - the fully loaded world that tokens read from.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::entities::{ModData, Player, PlayerId, ScreenId};

/// Name of the primary world location.
pub const FARM_LOCATION_NAME: &str = "Farm";

/// A location in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,

    /// Absent while a save is still being materialized.
    #[serde(default)]
    pub mod_data: Option<ModData>,
}

impl Location {
    /// Create a location with an empty mod data store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mod_data: Some(ModData::new()),
        }
    }

    /// Get the mod data store, creating it if it doesn't exist yet.
    pub fn mod_data_mut(&mut self) -> &mut ModData {
        self.mod_data.get_or_insert_with(ModData::new)
    }
}

/// Per-screen runtime state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenState {
    /// The player controlled on this screen.
    pub player: PlayerId,
    /// Whether the player is free to act (no menu, event, or cutscene).
    pub player_free: bool,
    /// Whether the player can move right now.
    pub can_move: bool,
}

impl ScreenState {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            player_free: true,
            can_move: true,
        }
    }
}

/// The complete state of a loaded world.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldState {
    /// Locations by name.
    pub locations: HashMap<String, Location>,

    /// All players in the world, local or remote.
    pub players: HashMap<PlayerId, Player>,

    /// Which player is active on each local screen.
    pub screens: BTreeMap<ScreenId, ScreenState>,

    /// Whether the game is paused (menu, host pause, unfocused window).
    pub paused: bool,

    /// Whether a festival or cutscene is holding the clock.
    pub event_in_progress: bool,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary world location.
    pub fn farm(&self) -> Option<&Location> {
        self.location(FARM_LOCATION_NAME)
    }

    pub fn farm_mut(&mut self) -> Option<&mut Location> {
        self.locations.get_mut(FARM_LOCATION_NAME)
    }

    /// Get a location by exact name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Get the player active on a screen.
    pub fn player_for(&self, screen: ScreenId) -> Option<&Player> {
        self.screens
            .get(&screen)
            .and_then(|state| self.players.get(&state.player))
    }

    /// Get the player active on a screen, mutably.
    pub fn player_for_mut(&mut self, screen: ScreenId) -> Option<&mut Player> {
        let id = self.screens.get(&screen)?.player;
        self.players.get_mut(&id)
    }

    /// Get the runtime state of a screen.
    pub fn screen(&self, screen: ScreenId) -> Option<&ScreenState> {
        self.screens.get(&screen)
    }

    pub fn screen_mut(&mut self, screen: ScreenId) -> Option<&mut ScreenState> {
        self.screens.get_mut(&screen)
    }

    /// Add a location to the world, replacing any with the same name.
    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.name.clone(), location);
    }

    /// Add a player to the world.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        let id = player.id;
        self.players.insert(id, player);
        id
    }

    /// Put a player on a local screen.
    pub fn assign_screen(&mut self, screen: ScreenId, player: PlayerId) {
        self.screens.insert(screen, ScreenState::new(player));
    }

    /// Remove a local screen, e.g. when a split-screen player leaves.
    pub fn remove_screen(&mut self, screen: ScreenId) -> Option<ScreenState> {
        self.screens.remove(&screen)
    }

    /// Whether more than one local screen is active.
    pub fn is_split_screen(&self) -> bool {
        self.screens.len() > 1
    }

    /// Whether the in-game clock is currently running.
    pub fn should_time_pass(&self) -> bool {
        !self.paused && !self.event_in_progress
    }
}
