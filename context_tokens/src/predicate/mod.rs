//! The seam between tokens and the game state query language.
//!
//! Tokens treat the query language as a black box behind [`PredicateEvaluator`].
//! [`QueryRegistry`] is a small reference evaluator: a comma-separated list of
//! `[!]NAME [args...]` sub-queries that must all hold.

mod queries;

pub use queries::*;

use game_world::{HostState, ScreenId};
use std::collections::HashMap;

/// Evaluates boolean predicate expressions against host state.
pub trait PredicateEvaluator {
    /// Check that an expression is well-formed.
    ///
    /// Returns the first sub-expression's error message verbatim.
    fn parse(&self, input: &str) -> Result<(), String>;

    /// Evaluate an expression that already passed [`PredicateEvaluator::parse`].
    fn check(&self, input: &str, host: &HostState, screen: ScreenId) -> bool;
}

/// A query handler, called with the arguments after the query name.
pub type QueryFn = Box<dyn Fn(&[&str], &HostState, ScreenId) -> bool>;

/// A parsed sub-query.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubQuery<'a> {
    negated: bool,
    name: &'a str,
    args: Vec<&'a str>,
}

/// A name-keyed table of query handlers.
pub struct QueryRegistry {
    queries: HashMap<String, QueryFn>,
}

impl Default for QueryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryRegistry {
    /// Create a registry containing only `TRUE` and `FALSE`.
    pub fn new() -> Self {
        let mut registry = Self {
            queries: HashMap::new(),
        };
        registry.register("TRUE", |_, _, _| true);
        registry.register("FALSE", |_, _, _| false);
        registry
    }

    /// Register a query handler. Names are case-insensitive; re-registering replaces.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&[&str], &HostState, ScreenId) -> bool + 'static,
    {
        self.queries.insert(name.to_uppercase(), Box::new(handler));
    }

    /// Check whether a query name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.queries.contains_key(&name.to_uppercase())
    }

    /// Get registered query names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.queries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn split(input: &str) -> Vec<Result<SubQuery<'_>, String>> {
        input
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                let (negated, body) = match raw.strip_prefix('!') {
                    Some(rest) => (true, rest.trim_start()),
                    None => (false, raw),
                };

                let mut words = body.split_whitespace();
                let name = words
                    .next()
                    .ok_or_else(|| format!("query '{input}' has an empty sub-query"))?;
                Ok(SubQuery {
                    negated,
                    name,
                    args: words.collect(),
                })
            })
            .collect()
    }
}

impl PredicateEvaluator for QueryRegistry {
    fn parse(&self, input: &str) -> Result<(), String> {
        for sub_query in Self::split(input) {
            let sub_query = sub_query?;
            if !self.contains(sub_query.name) {
                return Err(format!("'{}' isn't a known query", sub_query.name));
            }
        }
        Ok(())
    }

    fn check(&self, input: &str, host: &HostState, screen: ScreenId) -> bool {
        Self::split(input).into_iter().all(|sub_query| {
            let Ok(sub_query) = sub_query else {
                return false;
            };
            match self.queries.get(&sub_query.name.to_uppercase()) {
                Some(handler) => handler(&sub_query.args, host, screen) != sub_query.negated,
                None => false,
            }
        })
    }
}

impl std::fmt::Debug for QueryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRegistry")
            .field("queries", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_queries() {
        let registry = QueryRegistry::new();
        let host = HostState::new();

        assert!(registry.check("TRUE", &host, ScreenId::MAIN));
        assert!(!registry.check("FALSE", &host, ScreenId::MAIN));
        assert!(registry.check("!FALSE", &host, ScreenId::MAIN));
        assert!(registry.check("true, !false", &host, ScreenId::MAIN));
        assert!(!registry.check("TRUE, FALSE", &host, ScreenId::MAIN));
    }

    #[test]
    fn test_parse_unknown_query() {
        let registry = QueryRegistry::new();
        assert_eq!(
            registry.parse("TRUE, NOT_A_QUERY 1"),
            Err("'NOT_A_QUERY' isn't a known query".to_string())
        );
    }

    #[test]
    fn test_parse_empty_sub_query() {
        let registry = QueryRegistry::new();
        assert!(registry.parse("TRUE,").is_err());
        assert!(registry.parse("!").is_err());
    }

    #[test]
    fn test_handler_receives_args() {
        let mut registry = QueryRegistry::new();
        registry.register("ARG_COUNT_IS_TWO", |args, _, _| args.len() == 2);
        let host = HostState::new();

        assert!(registry.parse("arg_count_is_two a b").is_ok());
        assert!(registry.check("ARG_COUNT_IS_TWO a b", &host, ScreenId::MAIN));
        assert!(!registry.check("ARG_COUNT_IS_TWO a", &host, ScreenId::MAIN));
    }

    #[test]
    fn test_handler_receives_screen() {
        let mut registry = QueryRegistry::new();
        registry.register("IS_MAIN_SCREEN", |_, _, screen| screen == ScreenId::MAIN);
        let host = HostState::new();

        assert!(registry.check("IS_MAIN_SCREEN", &host, ScreenId::MAIN));
        assert!(!registry.check("IS_MAIN_SCREEN", &host, ScreenId(1)));
    }
}
