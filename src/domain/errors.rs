//! Domain errors for scaffolder actions.

use thiserror::Error;

/// Join configuration key names as `A and B` / `A, B and C`.
fn format_keys(keys: &[String]) -> String {
    match keys {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Errors surfaced by action registration and invocation.
#[derive(Debug, Error)]
pub enum ActionError {
    /// One or more required configuration values are unset or empty.
    #[error(
        "Confluent API credentials not found in environment variables. Please set {}.",
        format_keys(.keys)
    )]
    MissingConfiguration { keys: Vec<String> },

    #[error("Action not found: {0}")]
    ActionNotFound(String),

    #[error("Action already registered: {0}")]
    DuplicateAction(String),

    #[error("Invalid action id '{id}': {reason}")]
    InvalidActionId { id: String, reason: String },

    #[error("Invalid input for action {action}: {reason}")]
    InvalidInput { action: String, reason: String },

    #[error("Invalid output from action {action}: {reason}")]
    InvalidOutput { action: String, reason: String },

    #[error("Invalid schema for action {action}: {reason}")]
    InvalidSchema { action: String, reason: String },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl ActionError {
    /// Whether this error reports missing configuration.
    pub const fn is_missing_configuration(&self) -> bool {
        matches!(self, Self::MissingConfiguration { .. })
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
