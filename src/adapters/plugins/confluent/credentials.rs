//! `confluent:credentials:get` action.
//!
//! Reads the Confluent Cloud API key and secret from the injected
//! [`ConfigSource`] and emits them as the `apiKey` and `apiSecret` outputs.
//! Fails with [`ActionError::MissingConfiguration`] when either value is unset
//! or empty, in which case nothing is emitted.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::domain::errors::{ActionError, ActionResult};
use crate::domain::models::action::{ActionContext, ActionDescriptor, ActionId, ActionSchema};
use crate::domain::models::config::CredentialsConfig;
use crate::domain::models::credentials::{
    CredentialPair, GetCredentialsInput, API_KEY_OUTPUT, API_SECRET_OUTPUT,
};
use crate::domain::ports::{ConfigSource, TemplateAction};

/// Registration id of the credentials action.
pub const GET_CREDENTIALS_ACTION_ID: &str = "confluent:credentials:get";

const DESCRIPTION: &str = "Retrieves Confluent API credentials from environment variables";

/// Action returning Confluent Cloud API credentials.
#[derive(Debug)]
pub struct GetConfluentCredentialsAction {
    descriptor: ActionDescriptor,
    source: Arc<dyn ConfigSource>,
    keys: CredentialsConfig,
}

impl GetConfluentCredentialsAction {
    /// Create the action reading the default `CONFLUENT_CLOUD_API_*` keys.
    pub fn new(source: Arc<dyn ConfigSource>) -> ActionResult<Self> {
        Self::with_config(source, CredentialsConfig::default())
    }

    /// Create the action reading the keys named in `keys`.
    pub fn with_config(source: Arc<dyn ConfigSource>, keys: CredentialsConfig) -> ActionResult<Self> {
        let descriptor = ActionDescriptor::new(
            ActionId::parse(GET_CREDENTIALS_ACTION_ID)?,
            DESCRIPTION,
            ActionSchema::for_types::<GetCredentialsInput, CredentialPair>()?,
        );

        Ok(Self {
            descriptor,
            source,
            keys,
        })
    }

    /// Configuration keys this action reads.
    pub const fn keys(&self) -> &CredentialsConfig {
        &self.keys
    }

    /// Resolve the credential pair from the configuration source.
    ///
    /// Never returns a partially populated pair.
    pub fn credentials(&self) -> ActionResult<CredentialPair> {
        let api_key = self.source.get_non_empty(&self.keys.api_key_var);
        let api_secret = self.source.get_non_empty(&self.keys.api_secret_var);

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => CredentialPair::new(api_key, api_secret),
            (api_key, api_secret) => {
                debug!(
                    source = self.source.name(),
                    api_key_present = api_key.is_some(),
                    api_secret_present = api_secret.is_some(),
                    "Confluent credentials incomplete"
                );
                Err(ActionError::MissingConfiguration {
                    keys: vec![self.keys.api_key_var.clone(), self.keys.api_secret_var.clone()],
                })
            }
        }
    }
}

#[async_trait]
impl TemplateAction for GetConfluentCredentialsAction {
    fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    #[instrument(skip_all, fields(action_id = %ctx.action_id(), run_id = %ctx.run_id()))]
    async fn handler(&self, ctx: &mut ActionContext) -> ActionResult<()> {
        let credentials = self.credentials()?;

        info!(
            source = self.source.name(),
            "Successfully retrieved Confluent API credentials from environment variables"
        );

        ctx.output(API_KEY_OUTPUT, credentials.api_key());
        ctx.output(API_SECRET_OUTPUT, credentials.api_secret());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::config_source::InMemoryConfigSource;
    use serde_json::Map;

    fn action_with(source: InMemoryConfigSource) -> GetConfluentCredentialsAction {
        GetConfluentCredentialsAction::new(Arc::new(source)).expect("action should build")
    }

    fn context(action: &GetConfluentCredentialsAction) -> ActionContext {
        ActionContext::new(action.descriptor().id.clone(), Map::new())
    }

    #[test]
    fn test_descriptor() {
        let action = action_with(InMemoryConfigSource::new());
        let descriptor = action.descriptor();

        assert_eq!(descriptor.id.as_str(), "confluent:credentials:get");
        assert_eq!(
            descriptor.description,
            "Retrieves Confluent API credentials from environment variables"
        );
        assert_eq!(descriptor.schema.input["type"], "object");
        assert_eq!(
            descriptor.schema.output["properties"]["apiKey"]["type"],
            "string"
        );
        assert_eq!(
            descriptor.schema.output["properties"]["apiSecret"]["type"],
            "string"
        );
    }

    #[tokio::test]
    async fn test_handler_emits_both_outputs() {
        let action = action_with(
            InMemoryConfigSource::new()
                .with("CONFLUENT_CLOUD_API_KEY", "k1")
                .with("CONFLUENT_CLOUD_API_SECRET", "s1"),
        );
        let mut ctx = context(&action);

        action.handler(&mut ctx).await.expect("handler should succeed");

        let outputs = ctx.into_outputs();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs.get_str("apiKey"), Some("k1"));
        assert_eq!(outputs.get_str("apiSecret"), Some("s1"));
    }

    #[tokio::test]
    async fn test_handler_empty_key_emits_nothing() {
        let action = action_with(
            InMemoryConfigSource::new()
                .with("CONFLUENT_CLOUD_API_KEY", "")
                .with("CONFLUENT_CLOUD_API_SECRET", "s1"),
        );
        let mut ctx = context(&action);

        let err = action.handler(&mut ctx).await.unwrap_err();

        assert!(err.is_missing_configuration());
        assert!(ctx.outputs().is_empty());
    }

    #[tokio::test]
    async fn test_handler_missing_secret_emits_nothing() {
        let action = action_with(InMemoryConfigSource::new().with("CONFLUENT_CLOUD_API_KEY", "k1"));
        let mut ctx = context(&action);

        let err = action.handler(&mut ctx).await.unwrap_err();

        match err {
            ActionError::MissingConfiguration { keys } => assert_eq!(
                keys,
                vec!["CONFLUENT_CLOUD_API_KEY", "CONFLUENT_CLOUD_API_SECRET"]
            ),
            other => panic!("Expected MissingConfiguration, got {other:?}"),
        }
        assert!(ctx.outputs().is_empty());
    }

    #[test]
    fn test_neither_value_set() {
        let action = action_with(InMemoryConfigSource::new());
        let err = action.credentials().unwrap_err();
        assert!(err.to_string().contains("CONFLUENT_CLOUD_API_KEY"));
        assert!(err.to_string().contains("CONFLUENT_CLOUD_API_SECRET"));
    }

    #[test]
    fn test_custom_keys() {
        let keys = CredentialsConfig {
            api_key_var: "CC_KEY".to_string(),
            api_secret_var: "CC_SECRET".to_string(),
        };
        let source = InMemoryConfigSource::new()
            .with("CC_KEY", "k2")
            .with("CC_SECRET", "s2")
            .with("CONFLUENT_CLOUD_API_KEY", "ignored");
        let action = GetConfluentCredentialsAction::with_config(Arc::new(source), keys).unwrap();

        let pair = action.credentials().unwrap();
        assert_eq!(pair.api_key(), "k2");
        assert_eq!(pair.api_secret(), "s2");
        assert_eq!(action.keys().api_key_var, "CC_KEY");
    }

    #[test]
    fn test_custom_keys_in_error_message() {
        let keys = CredentialsConfig {
            api_key_var: "CC_KEY".to_string(),
            api_secret_var: "CC_SECRET".to_string(),
        };
        let action =
            GetConfluentCredentialsAction::with_config(Arc::new(InMemoryConfigSource::new()), keys)
                .unwrap();

        let message = action.credentials().unwrap_err().to_string();
        assert!(message.contains("Please set CC_KEY and CC_SECRET."), "got: {message}");
    }
}
