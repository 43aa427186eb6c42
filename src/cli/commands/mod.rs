//! CLI command implementations.

pub mod action;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::config_source::EnvConfigSource;
use crate::adapters::plugins::confluent::ConfluentActionsModule;
use crate::domain::models::config::Config;
use crate::services::ActionRegistry;

/// Build the registry the CLI runs against: the Confluent module reading
/// the process environment.
pub fn build_registry(config: &Config) -> Result<ActionRegistry> {
    let module = ConfluentActionsModule::with_config(
        Arc::new(EnvConfigSource::new()),
        config.credentials.clone(),
    );

    let mut registry = ActionRegistry::new();
    registry
        .install(&module)
        .context("Failed to register Confluent actions")?;
    Ok(registry)
}
