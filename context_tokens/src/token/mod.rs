//! The generic token: validation, per-screen caching, and the refresh pass.
//!
//! A token's lifecycle for one input on one screen:
//! 1. **Validate**: the input is parsed once and cached with a placeholder value
//! 2. **Refresh**: on every context change, each cached input is recomputed from
//!    host state and compared with its previous value
//! 3. **Read**: values are rendered from the cache; an entry that was never
//!    computed is filled on first read (scalar tokens only)
//!
//! Variant-specific behavior lives behind [`TokenKind`]; everything else is
//! written once in [`Token`].

mod cache;
mod values;

pub use cache::*;
pub use values::*;

use game_world::{HostState, ScreenId};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::TokenError;

/// The variant-specific half of a token.
pub trait TokenKind {
    /// Parsed form of a validated input.
    type Request: Debug;

    /// Cached value type. Two values are "unchanged" when they compare equal.
    type Value: Clone + PartialEq + Debug;

    /// The token's short name, e.g. `ModData`.
    fn name(&self) -> &'static str;

    /// Parse non-blank input into a request.
    fn parse(&self, input: &str) -> Result<Self::Request, TokenError>;

    /// The value a freshly validated entry holds before it's computed.
    fn placeholder(&self) -> Self::Value;

    /// Compute the current value from host state. Never fails; unavailable
    /// data maps to an absent or default value.
    fn produce(&self, request: &Self::Request, host: &HostState, screen: ScreenId) -> Self::Value;

    /// Render a value as the strings handed to the templating system.
    fn render(&self, value: &Self::Value) -> TokenValues;

    /// Whether the token's data source can be queried right now.
    fn is_ready(&self, host: &HostState, screen: ScreenId) -> bool;

    /// Whether one input can produce more than one value.
    fn multiple_values(&self) -> bool {
        false
    }

    /// The closed set of values this token can produce, if there is one.
    fn bounded_values(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Whether a never-computed entry is computed when first read.
    fn lazy_fill(&self) -> bool {
        !self.multiple_values()
    }
}

/// The host-facing token contract, object-safe so tokens can be registered by name.
pub trait ContextToken {
    /// The token's short name.
    fn name(&self) -> &'static str;

    /// Whether the token accepts input arguments.
    fn accepts_input(&self) -> bool {
        true
    }

    /// Whether the token needs input to produce values.
    fn requires_input(&self) -> bool {
        true
    }

    /// Whether the token may return multiple values for the given input.
    fn supports_multiple_values(&self, input: Option<&str>) -> bool;

    /// The possible values for the given input, if the token is bounded.
    fn bounded_value_set(&self, input: &str) -> Option<Vec<String>>;

    /// Validate input for a screen, caching it on first success.
    fn validate(&mut self, screen: ScreenId, input: &str) -> Result<(), TokenError>;

    /// Recompute every cached input on a screen. Returns whether any value changed.
    fn refresh(&mut self, host: &HostState, screen: ScreenId) -> bool;

    /// Whether the token's data source can be queried right now.
    fn is_ready(&self, host: &HostState, screen: ScreenId) -> bool;

    /// Get the current values for an input.
    fn get_values(&mut self, host: &HostState, screen: ScreenId, input: &str) -> TokenValues;

    /// Screens that have a cache.
    fn scopes(&self) -> Vec<ScreenId>;

    /// Drop one screen's cache. Returns whether it existed.
    fn drop_scope(&mut self, screen: ScreenId) -> bool;

    /// Drop every screen's cache.
    fn clear(&mut self);
}

/// A token kind together with its per-screen caches.
#[derive(Debug)]
pub struct Token<K: TokenKind> {
    kind: K,
    scopes: HashMap<ScreenId, ScopeCache<K::Request, K::Value>>,
}

impl<K: TokenKind> Token<K> {
    /// Create a token with no cached inputs.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            scopes: HashMap::new(),
        }
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Get a screen's cache, if it has one.
    pub fn scope(&self, screen: ScreenId) -> Option<&ScopeCache<K::Request, K::Value>> {
        self.scopes.get(&screen)
    }

    /// Get the cached value for an input without computing anything.
    pub fn cached_value(&self, screen: ScreenId, input: &str) -> Option<&K::Value> {
        self.scope(screen)?.get(input).map(|entry| &entry.value)
    }
}

impl<K: TokenKind> ContextToken for Token<K> {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn supports_multiple_values(&self, _input: Option<&str>) -> bool {
        self.kind.multiple_values()
    }

    fn bounded_value_set(&self, _input: &str) -> Option<Vec<String>> {
        self.kind
            .bounded_values()
            .map(|values| values.iter().map(|value| value.to_string()).collect())
    }

    fn validate(&mut self, screen: ScreenId, input: &str) -> Result<(), TokenError> {
        if input.trim().is_empty() {
            return Err(TokenError::Blank {
                token: self.kind.name(),
            });
        }

        if self
            .scopes
            .get(&screen)
            .is_some_and(|cache| cache.contains(input))
        {
            return Ok(());
        }

        let request = self.kind.parse(input)?;
        let entry = CacheEntry::pending(request, self.kind.placeholder());
        self.scopes.entry(screen).or_default().insert(input, entry);

        tracing::debug!(token = self.kind.name(), %screen, input, "validated token input");
        Ok(())
    }

    fn refresh(&mut self, host: &HostState, screen: ScreenId) -> bool {
        let Some(cache) = self.scopes.get_mut(&screen) else {
            return false;
        };

        // Producers only see host state, so the key set can't grow mid-pass.
        let mut changed = 0usize;
        for (input, entry) in cache.entries_mut() {
            let fresh = self.kind.produce(&entry.request, host, screen);
            entry.dirty = false;

            if fresh != entry.value {
                tracing::trace!(token = self.kind.name(), %screen, input, old = ?entry.value, new = ?fresh, "token value changed");
                entry.value = fresh;
                changed += 1;
            }
        }

        if changed > 0 {
            tracing::debug!(token = self.kind.name(), %screen, changed, "token context updated");
        }
        changed > 0
    }

    fn is_ready(&self, host: &HostState, screen: ScreenId) -> bool {
        self.kind.is_ready(host, screen)
    }

    fn get_values(&mut self, host: &HostState, screen: ScreenId, input: &str) -> TokenValues {
        let lazy_fill = self.kind.lazy_fill();
        let entry = self
            .scopes
            .get_mut(&screen)
            .and_then(|cache| cache.get_mut(input));

        match entry {
            Some(entry) => {
                if entry.dirty && lazy_fill {
                    entry.value = self.kind.produce(&entry.request, host, screen);
                    entry.dirty = false;
                }
                self.kind.render(&entry.value)
            }
            // blank or never-validated input
            None => self.kind.render(&self.kind.placeholder()),
        }
    }

    fn scopes(&self) -> Vec<ScreenId> {
        let mut screens: Vec<_> = self.scopes.keys().copied().collect();
        screens.sort_unstable();
        screens
    }

    fn drop_scope(&mut self, screen: ScreenId) -> bool {
        self.scopes.remove(&screen).is_some()
    }

    fn clear(&mut self) {
        self.scopes.clear();
    }
}
