//! Player definitions.

use serde::{Deserialize, Serialize};

use super::{ModData, PlayerId, PlayerStats};

/// A player (farmer) with the data tokens can read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Absent while a save is still being materialized.
    #[serde(default)]
    pub mod_data: Option<ModData>,

    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Create a new player with the given name and an empty mod data store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            mod_data: Some(ModData::new()),
            stats: PlayerStats::default(),
        }
    }

    /// Get the mod data store, creating it if it doesn't exist yet.
    pub fn mod_data_mut(&mut self) -> &mut ModData {
        self.mod_data.get_or_insert_with(ModData::new)
    }
}
