//! Host lifecycle: the title screen, a save mid-load, and a ready world.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::Player;
use crate::world_state::{Location, WorldState, FARM_LOCATION_NAME};

/// Save data that exists while a game is being loaded, before the world is ready.
///
/// Any part may still be missing; readers must treat that as "not available yet".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SaveSnapshot {
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
}

impl SaveSnapshot {
    /// Create an empty snapshot (nothing deserialized yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the primary world location, if it has been loaded.
    pub fn farm(&self) -> Option<&Location> {
        self.locations
            .as_ref()?
            .iter()
            .find(|location| location.name == FARM_LOCATION_NAME)
    }
}

/// Everything the host exposes to token producers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostState {
    /// The loaded world, if any.
    pub world: Option<WorldState>,

    /// Partially loaded save data while a load is in progress.
    pub loading: Option<SaveSnapshot>,

    /// Whether the world is fully loaded and playable.
    pub world_ready: bool,

    /// IDs of installed mods.
    #[serde(default)]
    pub installed_mods: HashSet<String>,
}

impl HostState {
    /// Create a host sitting on the title screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host snapshot handed over as JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Create a host with a fully loaded world.
    pub fn with_world(world: WorldState) -> Self {
        let mut host = Self::new();
        host.finish_loading(world);
        host
    }

    /// Start loading a save.
    pub fn begin_loading(&mut self, snapshot: SaveSnapshot) {
        self.world = None;
        self.world_ready = false;
        self.loading = Some(snapshot);
    }

    /// Finish loading: the world becomes ready and the load snapshot is dropped.
    pub fn finish_loading(&mut self, world: WorldState) {
        self.world = Some(world);
        self.loading = None;
        self.world_ready = true;
    }

    /// Unload everything and go back to the title screen.
    pub fn return_to_title(&mut self) {
        self.world = None;
        self.loading = None;
        self.world_ready = false;
    }

    /// The loaded world, but only once it's ready.
    pub fn ready_world(&self) -> Option<&WorldState> {
        if self.world_ready {
            self.world.as_ref()
        } else {
            None
        }
    }

    pub fn ready_world_mut(&mut self) -> Option<&mut WorldState> {
        if self.world_ready {
            self.world.as_mut()
        } else {
            None
        }
    }

    pub fn is_world_ready(&self) -> bool {
        self.world_ready && self.world.is_some()
    }

    /// Record an installed mod.
    pub fn install_mod(&mut self, id: impl Into<String>) {
        self.installed_mods.insert(id.into());
    }

    /// Check whether a mod is installed (case-insensitive).
    pub fn is_mod_loaded(&self, id: &str) -> bool {
        self.installed_mods
            .iter()
            .any(|installed| installed.eq_ignore_ascii_case(id))
    }
}
