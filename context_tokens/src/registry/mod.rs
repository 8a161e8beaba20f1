//! Token Registry - named registration of tokens and dispatch of host signals.
//!
//! Tokens are registered under `<mod id>/<token name>`, e.g. `Esca.EMP/ModData`,
//! and can be looked up by either the full or the short name.

mod signals;

pub use signals::*;

use game_world::{HostState, ScreenId};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::TokenConfig;
use crate::error::TokenError;
use crate::kinds::{
    ModDataKeySet, ModDataValue, PlayerStatValue, PredicateResult, GAME_STATE_QUERY, MOD_DATA,
    MOD_DATA_KEYS, PLAYER_STAT,
};
use crate::predicate::{register_context_queries, PredicateEvaluator, QueryRegistry};
use crate::token::{ContextToken, Token, TokenValues};

/// The set of tokens registered by one mod.
pub struct TokenRegistry {
    mod_id: String,
    tokens: BTreeMap<String, Box<dyn ContextToken>>,
}

impl TokenRegistry {
    /// Create an empty registry for a mod.
    pub fn new(mod_id: impl Into<String>) -> Self {
        Self {
            mod_id: mod_id.into(),
            tokens: BTreeMap::new(),
        }
    }

    /// Create a registry with the tokens enabled in `config`, backed by a
    /// [`QueryRegistry`] holding the built-in context queries under
    /// `config.query_prefix`.
    pub fn with_defaults(config: &TokenConfig) -> Result<Self, TokenError> {
        let mut queries = QueryRegistry::new();
        register_context_queries(&mut queries, &config.query_prefix);
        Self::from_config(config, Box::new(queries))
    }

    /// Create a registry with the tokens enabled in `config`.
    ///
    /// The evaluator backs the `GameStateQuery` token and is dropped if that
    /// token isn't enabled.
    pub fn from_config(
        config: &TokenConfig,
        evaluator: Box<dyn PredicateEvaluator>,
    ) -> Result<Self, TokenError> {
        let mut registry = Self::new(config.mod_id.clone());
        let mut evaluator = Some(evaluator);

        for name in &config.enabled_tokens {
            let token: Box<dyn ContextToken> = if name.eq_ignore_ascii_case(MOD_DATA) {
                Box::new(Token::new(ModDataValue))
            } else if name.eq_ignore_ascii_case(MOD_DATA_KEYS) {
                Box::new(Token::new(ModDataKeySet))
            } else if name.eq_ignore_ascii_case(PLAYER_STAT) {
                Box::new(Token::new(PlayerStatValue))
            } else if name.eq_ignore_ascii_case(GAME_STATE_QUERY) {
                let evaluator = evaluator
                    .take()
                    .ok_or_else(|| TokenError::DuplicateToken(registry.qualified(GAME_STATE_QUERY)))?;
                Box::new(Token::new(PredicateResult::new(evaluator)))
            } else {
                return Err(TokenError::Config(format!("unknown token '{name}'")));
            };
            registry.register(token)?;
        }

        Ok(registry)
    }

    /// The registering mod's ID.
    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    /// Get the full name for a token's short name.
    pub fn qualified(&self, name: &str) -> String {
        format!("{}/{}", self.mod_id, name)
    }

    /// Register a token. Returns its full name.
    pub fn register(&mut self, token: Box<dyn ContextToken>) -> Result<String, TokenError> {
        let name = self.qualified(token.name());
        if self.tokens.contains_key(&name) {
            return Err(TokenError::DuplicateToken(name));
        }

        tracing::info!(token = %name, "registered token");
        self.tokens.insert(name.clone(), token);
        Ok(name)
    }

    /// Full names of every registered token, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.tokens.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by full or short name.
    pub fn get(&self, name: &str) -> Result<&(dyn ContextToken + 'static), TokenError> {
        let key = self.resolve_name(name)?;
        self.tokens
            .get(&key)
            .map(|token| &**token)
            .ok_or(TokenError::UnknownToken(key))
    }

    /// Look up a token mutably by full or short name.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn ContextToken + 'static), TokenError> {
        let key = self.resolve_name(name)?;
        match self.tokens.get_mut(&key) {
            Some(token) => Ok(&mut **token),
            None => Err(TokenError::UnknownToken(key)),
        }
    }

    fn resolve_name(&self, name: &str) -> Result<String, TokenError> {
        if self.tokens.contains_key(name) {
            return Ok(name.to_string());
        }
        let qualified = self.qualified(name);
        if self.tokens.contains_key(&qualified) {
            return Ok(qualified);
        }
        Err(TokenError::UnknownToken(name.to_string()))
    }

    /// Validate input for a named token on a screen.
    pub fn validate(&mut self, name: &str, screen: ScreenId, input: &str) -> Result<(), TokenError> {
        let result = self
            .get_mut(name)
            .and_then(|token| token.validate(screen, input));
        match &result {
            Err(e) if e.is_input_error() => {
                tracing::warn!(token = name, %screen, input, "rejected token input: {e}");
            }
            Err(e) => tracing::error!(token = name, "can't validate token input: {e}"),
            Ok(()) => {}
        }
        result
    }

    /// Get a named token's values for an input.
    pub fn get_values(
        &mut self,
        name: &str,
        host: &HostState,
        screen: ScreenId,
        input: &str,
    ) -> Result<TokenValues, TokenError> {
        Ok(self.get_mut(name)?.get_values(host, screen, input))
    }

    /// Check whether a named token's data source is available.
    pub fn is_ready(&self, name: &str, host: &HostState, screen: ScreenId) -> Result<bool, TokenError> {
        Ok(self.get(name)?.is_ready(host, screen))
    }

    /// Refresh every token on one screen. Returns the names of tokens that changed.
    pub fn update_context(&mut self, host: &HostState, screen: ScreenId) -> Vec<String> {
        let mut changed = Vec::new();
        for (name, token) in self.tokens.iter_mut() {
            if token.refresh(host, screen) {
                changed.push(name.clone());
            }
        }
        changed
    }

    /// Screens that have a cache in any token.
    pub fn scopes(&self) -> BTreeSet<ScreenId> {
        self.tokens
            .values()
            .flat_map(|token| token.scopes())
            .collect()
    }

    /// Handle a host signal. Returns the names of tokens whose values changed.
    pub fn handle_signal(&mut self, host: &HostState, signal: HostSignal) -> Vec<String> {
        if signal.is_teardown() {
            self.teardown(signal.screen());
            return Vec::new();
        }

        match signal.screen() {
            Some(screen) => self.update_context(host, screen),
            None => {
                let mut changed = BTreeSet::new();
                for screen in self.scopes() {
                    changed.extend(self.update_context(host, screen));
                }
                changed.into_iter().collect()
            }
        }
    }

    /// Drop one screen's caches, or every cache when no screen is given.
    fn teardown(&mut self, screen: Option<ScreenId>) {
        match screen {
            Some(screen) => {
                let mut dropped = 0usize;
                for token in self.tokens.values_mut() {
                    if token.drop_scope(screen) {
                        dropped += 1;
                    }
                }
                tracing::info!(%screen, tokens = dropped, "dropped token caches for disconnected screen");
            }
            None => {
                for token in self.tokens.values_mut() {
                    token.clear();
                }
                tracing::info!("dropped all token caches on return to title");
            }
        }
    }
}

impl std::fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("mod_id", &self.mod_id)
            .field("tokens", &self.names())
            .finish()
    }
}
