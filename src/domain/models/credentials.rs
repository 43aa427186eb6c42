//! Confluent Cloud credential models.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{ActionError, ActionResult};
use crate::domain::models::action::ActionOutput;

/// Output name carrying the API key.
pub const API_KEY_OUTPUT: &str = "apiKey";

/// Output name carrying the API secret.
pub const API_SECRET_OUTPUT: &str = "apiSecret";

/// Confluent Cloud API key and secret.
///
/// Built fresh for every invocation and never persisted. Both fields are
/// guaranteed non-empty. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPair {
    #[schemars(
        title = "Confluent API Key",
        description = "The Confluent API Key retrieved from environment variables",
        length(min = 1)
    )]
    api_key: String,

    #[schemars(
        title = "Confluent API Secret",
        description = "The Confluent API Secret retrieved from environment variables",
        length(min = 1)
    )]
    api_secret: String,
}

impl CredentialPair {
    /// Create a pair, rejecting empty values.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> ActionResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(ActionError::InvalidCredentials(
                "API key cannot be empty".to_string(),
            ));
        }
        if api_secret.is_empty() {
            return Err(ActionError::InvalidCredentials(
                "API secret cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Rebuild a pair from the outputs of a credentials action.
    pub fn from_output(output: &ActionOutput) -> ActionResult<Self> {
        let field = |name: &str| {
            output.get_str(name).ok_or_else(|| {
                ActionError::InvalidCredentials(format!("output '{name}' is missing"))
            })
        };

        Self::new(field(API_KEY_OUTPUT)?, field(API_SECRET_OUTPUT)?)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Masked `(key, secret)` for display.
    pub fn redacted(&self) -> (String, String) {
        (mask(&self.api_key), mask(&self.api_secret))
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (api_key, api_secret) = self.redacted();
        f.debug_struct("CredentialPair")
            .field("api_key", &api_key)
            .field("api_secret", &api_secret)
            .finish()
    }
}

/// Mask a secret, keeping a short prefix only when the value is long enough
/// that the prefix does not give most of it away.
pub fn mask(value: &str) -> String {
    const VISIBLE: usize = 4;
    let len = value.chars().count();
    if len <= VISIBLE * 2 {
        return "*".repeat(len.max(4));
    }
    let prefix: String = value.chars().take(VISIBLE).collect();
    format!("{prefix}{}", "*".repeat(len - VISIBLE))
}

/// Input of the credentials action. The action takes no parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetCredentialsInput {}
