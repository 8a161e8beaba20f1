//! Token configuration, read from TOML.

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::kinds::{GAME_STATE_QUERY, MOD_DATA, MOD_DATA_KEYS, PLAYER_STAT};

/// Settings for registering tokens and built-in queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Unique ID of the registering mod. Tokens are named `<mod_id>/<token>`.
    pub mod_id: String,

    /// Prefix for built-in game state query names, e.g. `Esca.EMP_IS_WORLD_READY`.
    pub query_prefix: String,

    /// Short names of the tokens to register.
    pub enabled_tokens: Vec<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            mod_id: "Esca.EMP".to_string(),
            query_prefix: "Esca.EMP_".to_string(),
            enabled_tokens: [GAME_STATE_QUERY, MOD_DATA, MOD_DATA_KEYS, PLAYER_STAT]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl TokenConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, TokenError> {
        toml::from_str(text).map_err(|e| TokenError::Config(e.to_string()))
    }

    /// Parse a config, falling back to the defaults if the text is invalid.
    pub fn load_or_default(text: &str) -> Self {
        match Self::from_toml(text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Error while reading token config. Using default settings instead: {e}");
                Self::default()
            }
        }
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> Result<String, TokenError> {
        toml::to_string(self).map_err(|e| TokenError::Config(e.to_string()))
    }

    /// Check whether a token is enabled (case-insensitive).
    pub fn is_enabled(&self, token: &str) -> bool {
        self.enabled_tokens
            .iter()
            .any(|name| name.eq_ignore_ascii_case(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all_tokens() {
        let config = TokenConfig::default();
        assert!(config.is_enabled("ModData"));
        assert!(config.is_enabled("moddatakeys"));
        assert!(config.is_enabled("PlayerStat"));
        assert!(config.is_enabled("GameStateQuery"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TokenConfig::from_toml(r#"mod_id = "Example.Mod""#).unwrap();
        assert_eq!(config.mod_id, "Example.Mod");
        assert_eq!(config.query_prefix, "Esca.EMP_");
        assert_eq!(config.enabled_tokens.len(), 4);
    }

    #[test]
    fn test_enabled_list() {
        let config = TokenConfig::from_toml(r#"enabled_tokens = ["PlayerStat"]"#).unwrap();
        assert!(config.is_enabled("PlayerStat"));
        assert!(!config.is_enabled("ModData"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TokenConfig::from_toml("mod_id = [");
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = TokenConfig::load_or_default("enabled_tokens = 3");
        assert_eq!(config, TokenConfig::default());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = TokenConfig {
            mod_id: "A.B".to_string(),
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(TokenConfig::from_toml(&text).unwrap(), config);
    }
}
