//! `GameStateQuery <query>`: the result of a game state query, `True` or `False`.

use game_world::{HostState, ScreenId};

use super::GAME_STATE_QUERY;
use crate::error::TokenError;
use crate::predicate::PredicateEvaluator;
use crate::token::{TokenKind, TokenValues};

const BOOLEAN_VALUES: &[&str] = &["True", "False"];

/// Evaluates a predicate expression through an external evaluator.
pub struct PredicateResult {
    evaluator: Box<dyn PredicateEvaluator>,
}

impl PredicateResult {
    pub fn new(evaluator: Box<dyn PredicateEvaluator>) -> Self {
        Self { evaluator }
    }
}

impl std::fmt::Debug for PredicateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateResult").finish_non_exhaustive()
    }
}

impl TokenKind for PredicateResult {
    /// The query text, passed to the evaluator verbatim.
    type Request = String;
    type Value = bool;

    fn name(&self) -> &'static str {
        GAME_STATE_QUERY
    }

    fn parse(&self, input: &str) -> Result<String, TokenError> {
        self.evaluator
            .parse(input)
            .map_err(|reason| TokenError::Predicate {
                token: GAME_STATE_QUERY,
                reason,
            })?;
        Ok(input.to_string())
    }

    fn placeholder(&self) -> bool {
        false
    }

    fn produce(&self, query: &String, host: &HostState, screen: ScreenId) -> bool {
        self.evaluator.check(query, host, screen)
    }

    fn render(&self, value: &bool) -> TokenValues {
        TokenValues::single(if *value { "True" } else { "False" })
    }

    fn is_ready(&self, host: &HostState, _screen: ScreenId) -> bool {
        host.is_world_ready()
    }

    fn bounded_values(&self) -> Option<&'static [&'static str]> {
        Some(BOOLEAN_VALUES)
    }
}
