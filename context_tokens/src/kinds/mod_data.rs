//! `ModData` and `ModDataKeys`: read a target's mod data store.
//!
//! Formats:
//! - `ModData <Farm|Player> <key>` returns the value stored under `key`, or `""`
//! - `ModDataKeys <Farm|Player>` returns every key, in ordinal order

use game_world::{HostState, ScreenId};
use std::collections::BTreeSet;

use super::{MOD_DATA, MOD_DATA_KEYS};
use crate::error::TokenError;
use crate::target::{mod_data_available, Target};
use crate::token::{TokenKind, TokenValues};

/// A parsed `ModData` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDataRequest {
    pub target: Target,
    /// Compared verbatim against mod data keys.
    pub key: String,
}

/// Reads one value from a target's mod data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModDataValue;

impl TokenKind for ModDataValue {
    type Request = ModDataRequest;
    /// `None` while the target or key doesn't exist.
    type Value = Option<String>;

    fn name(&self) -> &'static str {
        MOD_DATA
    }

    fn parse(&self, input: &str) -> Result<ModDataRequest, TokenError> {
        let input = input.trim();
        let (target, key) = match input.split_once(char::is_whitespace) {
            Some((target, key)) => (target, key.trim_start()),
            None => (input, ""),
        };

        let target = parse_target(MOD_DATA, target)?;
        if key.is_empty() {
            return Err(TokenError::MissingField {
                token: MOD_DATA,
                field: "Key",
            });
        }

        Ok(ModDataRequest {
            target,
            key: key.to_string(),
        })
    }

    fn placeholder(&self) -> Option<String> {
        None
    }

    fn produce(&self, request: &ModDataRequest, host: &HostState, screen: ScreenId) -> Option<String> {
        request
            .target
            .resolve(host, screen)?
            .get(&request.key)
            .map(str::to_string)
    }

    fn render(&self, value: &Option<String>) -> TokenValues {
        TokenValues::single(value.as_deref().unwrap_or_default())
    }

    fn is_ready(&self, host: &HostState, _screen: ScreenId) -> bool {
        mod_data_available(host)
    }
}

/// Lists every key in a target's mod data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModDataKeySet;

impl TokenKind for ModDataKeySet {
    type Request = Target;
    /// `None` while the target doesn't exist; never conflated with an empty set.
    type Value = Option<BTreeSet<String>>;

    fn name(&self) -> &'static str {
        MOD_DATA_KEYS
    }

    fn parse(&self, input: &str) -> Result<Target, TokenError> {
        parse_target(MOD_DATA_KEYS, input.trim())
    }

    fn placeholder(&self) -> Option<BTreeSet<String>> {
        None
    }

    fn produce(&self, target: &Target, host: &HostState, screen: ScreenId) -> Option<BTreeSet<String>> {
        let mod_data = target.resolve(host, screen)?;
        Some(mod_data.keys().map(str::to_string).collect())
    }

    fn render(&self, value: &Option<BTreeSet<String>>) -> TokenValues {
        // BTreeSet<String> iterates in byte order, which is ordinal order
        value
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    fn is_ready(&self, host: &HostState, _screen: ScreenId) -> bool {
        mod_data_available(host)
    }

    fn multiple_values(&self) -> bool {
        true
    }
}

fn parse_target(token: &'static str, name: &str) -> Result<Target, TokenError> {
    Target::parse(name).ok_or(TokenError::UnrecognizedValue {
        token,
        field: "Target",
        expected: Target::EXPECTED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::{add_split_screen_player, ready_host};
    use crate::token::{ContextToken, Token};
    use game_world::{Location, Player, SaveSnapshot};

    fn set_player_data(host: &mut HostState, screen: ScreenId, key: &str, value: &str) {
        host.ready_world_mut()
            .unwrap()
            .player_for_mut(screen)
            .unwrap()
            .mod_data_mut()
            .set(key, value);
    }

    fn set_farm_data(host: &mut HostState, key: &str, value: &str) {
        host.ready_world_mut()
            .unwrap()
            .farm_mut()
            .unwrap()
            .mod_data_mut()
            .set(key, value);
    }

    #[test]
    fn test_parse_value_input() {
        let request = ModDataValue.parse("PLAYER MyFlag").unwrap();
        assert_eq!(request.target, Target::Player);
        assert_eq!(request.key, "MyFlag");

        let request = ModDataValue.parse("  farm \t some key ").unwrap();
        assert_eq!(request.target, Target::Farm);
        assert_eq!(request.key, "some key");
    }

    #[test]
    fn test_parse_value_requires_key() {
        assert_eq!(
            ModDataValue.parse("farm"),
            Err(TokenError::MissingField {
                token: MOD_DATA,
                field: "Key"
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_target() {
        let error = ModDataValue.parse("town MyFlag").unwrap_err();
        assert_eq!(
            error.to_string(),
            "ModData field 'Target' was not a recognized value. Expected values: Farm, Player"
        );

        assert!(ModDataKeySet.parse("town").is_err());
        assert!(ModDataKeySet.parse("farm extra").is_err());
        assert_eq!(ModDataKeySet.parse(" Farm "), Ok(Target::Farm));
    }

    #[test]
    fn test_value_appears_after_refresh() {
        let mut host = ready_host();
        let mut token = Token::new(ModDataValue);

        token.validate(ScreenId::MAIN, "player MyFlag").unwrap();
        assert_eq!(token.get_values(&host, ScreenId::MAIN, "player MyFlag").first(), Some(""));

        set_player_data(&mut host, ScreenId::MAIN, "MyFlag", "1");
        assert!(token.refresh(&host, ScreenId::MAIN));
        assert_eq!(token.get_values(&host, ScreenId::MAIN, "player MyFlag").first(), Some("1"));

        assert!(!token.refresh(&host, ScreenId::MAIN));
    }

    #[test]
    fn test_first_read_fills_value() {
        let mut host = ready_host();
        set_player_data(&mut host, ScreenId::MAIN, "MyFlag", "1");

        let mut token = Token::new(ModDataValue);
        token.validate(ScreenId::MAIN, "player MyFlag").unwrap();

        // read before any refresh
        assert_eq!(token.get_values(&host, ScreenId::MAIN, "player MyFlag").first(), Some("1"));
        assert!(!token.refresh(&host, ScreenId::MAIN));
    }

    #[test]
    fn test_missing_key_then_removed_key() {
        let mut host = ready_host();
        let mut token = Token::new(ModDataValue);
        token.validate(ScreenId::MAIN, "farm a").unwrap();

        // absent before and after: no change
        assert!(!token.refresh(&host, ScreenId::MAIN));

        set_farm_data(&mut host, "a", "");
        // null -> "" is a change even though both render the same
        assert!(token.refresh(&host, ScreenId::MAIN));

        host.ready_world_mut().unwrap().farm_mut().unwrap().mod_data_mut().remove("a");
        assert!(token.refresh(&host, ScreenId::MAIN));
        assert_eq!(token.cached_value(ScreenId::MAIN, "farm a"), Some(&None));
    }

    #[test]
    fn test_player_target_is_per_screen() {
        let mut host = ready_host();
        add_split_screen_player(&mut host);
        set_player_data(&mut host, ScreenId::MAIN, "k", "main");
        set_player_data(&mut host, ScreenId(1), "k", "guest");

        let mut token = Token::new(ModDataValue);
        token.validate(ScreenId::MAIN, "player k").unwrap();
        token.validate(ScreenId(1), "player k").unwrap();
        token.refresh(&host, ScreenId::MAIN);
        token.refresh(&host, ScreenId(1));

        assert_eq!(token.get_values(&host, ScreenId::MAIN, "player k").first(), Some("main"));
        assert_eq!(token.get_values(&host, ScreenId(1), "player k").first(), Some("guest"));
    }

    #[test]
    fn test_reads_save_while_loading() {
        let mut snapshot = SaveSnapshot::new();
        let mut player = Player::new("Loading");
        player.mod_data_mut().set("k", "from save");
        snapshot.player = Some(player);
        snapshot.locations = Some(vec![Location::new("Farm")]);

        let mut host = HostState::new();
        host.begin_loading(snapshot);

        let mut token = Token::new(ModDataValue);
        assert!(token.is_ready(&host, ScreenId::MAIN));
        token.validate(ScreenId::MAIN, "player k").unwrap();
        assert!(token.refresh(&host, ScreenId::MAIN));
        assert_eq!(token.get_values(&host, ScreenId::MAIN, "player k").first(), Some("from save"));
    }

    #[test]
    fn test_not_ready_without_data() {
        let token = Token::new(ModDataKeySet);
        assert!(!token.is_ready(&HostState::new(), ScreenId::MAIN));
        assert!(token.is_ready(&ready_host(), ScreenId::MAIN));
    }

    #[test]
    fn test_keys_sorted_ordinally() {
        let mut host = ready_host();
        set_farm_data(&mut host, "b", "1");
        set_farm_data(&mut host, "a", "1");
        set_farm_data(&mut host, "B", "1");

        let mut token = Token::new(ModDataKeySet);
        token.validate(ScreenId::MAIN, "farm").unwrap();
        assert!(token.refresh(&host, ScreenId::MAIN));

        let keys = token.get_values(&host, ScreenId::MAIN, "farm").into_vec();
        assert_eq!(keys, vec!["B", "a", "b"]);
    }

    #[test]
    fn test_key_set_change_detection() {
        let mut host = ready_host();
        set_farm_data(&mut host, "a", "1");

        let mut token = Token::new(ModDataKeySet);
        token.validate(ScreenId::MAIN, "farm").unwrap();
        assert!(token.refresh(&host, ScreenId::MAIN));

        // value changes don't change the key set
        set_farm_data(&mut host, "a", "2");
        assert!(!token.refresh(&host, ScreenId::MAIN));

        set_farm_data(&mut host, "c", "1");
        assert!(token.refresh(&host, ScreenId::MAIN));
    }

    #[test]
    fn test_key_set_empty_differs_from_absent() {
        let mut host = HostState::new();
        let mut token = Token::new(ModDataKeySet);
        token.validate(ScreenId::MAIN, "player").unwrap();

        // absent -> absent
        assert!(!token.refresh(&host, ScreenId::MAIN));
        assert!(token.get_values(&host, ScreenId::MAIN, "player").is_empty());

        // absent -> empty set
        host = ready_host();
        assert!(token.refresh(&host, ScreenId::MAIN));
        assert_eq!(token.cached_value(ScreenId::MAIN, "player"), Some(&Some(BTreeSet::new())));

        // empty set -> absent
        host.return_to_title();
        assert!(token.refresh(&host, ScreenId::MAIN));
    }

    #[test]
    fn test_key_set_is_not_lazily_filled() {
        let mut host = ready_host();
        set_farm_data(&mut host, "a", "1");

        let mut token = Token::new(ModDataKeySet);
        token.validate(ScreenId::MAIN, "farm").unwrap();
        assert!(token.get_values(&host, ScreenId::MAIN, "farm").is_empty());
        assert!(token.supports_multiple_values(Some("farm")));
    }
}
