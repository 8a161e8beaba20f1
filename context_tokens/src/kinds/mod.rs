//! The four token variants.

mod mod_data;
mod player_stat;
mod predicate_result;

pub use mod_data::*;
pub use player_stat::*;
pub use predicate_result::*;

/// Short name of the [`ModDataValue`] token.
pub const MOD_DATA: &str = "ModData";
/// Short name of the [`ModDataKeySet`] token.
pub const MOD_DATA_KEYS: &str = "ModDataKeys";
/// Short name of the [`PlayerStatValue`] token.
pub const PLAYER_STAT: &str = "PlayerStat";
/// Short name of the [`PredicateResult`] token.
pub const GAME_STATE_QUERY: &str = "GameStateQuery";

#[cfg(test)]
pub(crate) mod test_support {
    use game_world::{HostState, Location, Player, ScreenId, WorldState};

    /// A ready world with a farm and one player on the main screen.
    pub fn ready_host() -> HostState {
        let mut world = WorldState::new();
        world.add_location(Location::new("Farm"));
        let id = world.add_player(Player::new("Farmer"));
        world.assign_screen(ScreenId::MAIN, id);
        HostState::with_world(world)
    }

    /// Add a second local player on screen 1.
    pub fn add_split_screen_player(host: &mut HostState) {
        let world = host.ready_world_mut().expect("world is ready");
        let id = world.add_player(Player::new("Guest"));
        world.assign_screen(ScreenId(1), id);
    }
}
