//! `PlayerStat <name>`: a stat counter for the player on the current screen.

use game_world::{HostState, ScreenId};

use super::PLAYER_STAT;
use crate::error::TokenError;
use crate::token::{TokenKind, TokenValues};

/// Reads one of the current player's stat counters.
///
/// Stat names aren't checked: unknown stats read as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerStatValue;

impl TokenKind for PlayerStatValue {
    type Request = String;
    type Value = u32;

    fn name(&self) -> &'static str {
        PLAYER_STAT
    }

    fn parse(&self, input: &str) -> Result<String, TokenError> {
        Ok(input.trim().to_string())
    }

    fn placeholder(&self) -> u32 {
        0
    }

    fn produce(&self, stat: &String, host: &HostState, screen: ScreenId) -> u32 {
        host.ready_world()
            .and_then(|world| world.player_for(screen))
            .map(|player| player.stats.get(stat))
            .unwrap_or(0)
    }

    fn render(&self, value: &u32) -> TokenValues {
        TokenValues::single(value.to_string())
    }

    fn is_ready(&self, host: &HostState, _screen: ScreenId) -> bool {
        host.is_world_ready()
    }
}
