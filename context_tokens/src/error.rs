//! Error types for token validation and registration.

use thiserror::Error;

/// Errors surfaced to the templating system.
///
/// Validation errors are only ever produced by `validate`; refreshing and
/// reading a token never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("{token} input was null or blank.")]
    Blank { token: &'static str },

    #[error("{token} field '{field}' is required, but no value was provided.")]
    MissingField {
        token: &'static str,
        field: &'static str,
    },

    #[error("{token} field '{field}' was not a recognized value. Expected values: {expected}")]
    UnrecognizedValue {
        token: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{token} input could not be parsed: {reason}")]
    Predicate { token: &'static str, reason: String },

    #[error("no token named '{0}' is registered")]
    UnknownToken(String),

    #[error("a token named '{0}' is already registered")]
    DuplicateToken(String),

    #[error("invalid token config: {0}")]
    Config(String),
}

impl TokenError {
    /// Whether this error came from rejecting token input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TokenError::Blank { .. }
                | TokenError::MissingField { .. }
                | TokenError::UnrecognizedValue { .. }
                | TokenError::Predicate { .. }
        )
    }
}
