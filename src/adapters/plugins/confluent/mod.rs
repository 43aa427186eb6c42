//! Confluent Cloud scaffolder actions.
//!
//! [`ConfluentActionsModule`] is the backend module that adds these actions
//! to the `scaffolder` plugin.

pub mod credentials;

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::ActionResult;
use crate::domain::models::config::CredentialsConfig;
use crate::domain::ports::{ActionsExtensionPoint, ActionsModule, ConfigSource, TemplateAction};

pub use credentials::{GetConfluentCredentialsAction, GET_CREDENTIALS_ACTION_ID};

/// Module that adds the Confluent actions to the scaffolder.
#[derive(Debug)]
pub struct ConfluentActionsModule {
    source: Arc<dyn ConfigSource>,
    credentials: CredentialsConfig,
}

impl ConfluentActionsModule {
    /// Plugin this module extends.
    pub const PLUGIN_ID: &'static str = "scaffolder";

    /// Id of this module.
    pub const MODULE_ID: &'static str = "confluent-actions";

    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self::with_config(source, CredentialsConfig::default())
    }

    pub const fn with_config(source: Arc<dyn ConfigSource>, credentials: CredentialsConfig) -> Self {
        Self {
            source,
            credentials,
        }
    }

    /// Build every action this module provides.
    pub fn actions(&self) -> ActionResult<Vec<Arc<dyn TemplateAction>>> {
        let get_credentials = GetConfluentCredentialsAction::with_config(
            Arc::clone(&self.source),
            self.credentials.clone(),
        )?;

        Ok(vec![Arc::new(get_credentials)])
    }
}

impl ActionsModule for ConfluentActionsModule {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn module_id(&self) -> &'static str {
        Self::MODULE_ID
    }

    fn init(&self, actions: &mut dyn ActionsExtensionPoint) -> ActionResult<()> {
        let provided = self.actions()?;
        info!(
            plugin_id = Self::PLUGIN_ID,
            module_id = Self::MODULE_ID,
            action_count = provided.len(),
            "Adding Confluent actions to the scaffolder"
        );
        actions.add_actions(provided)
    }
}
