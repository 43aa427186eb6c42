//! Confluent scaffolder actions
//!
//! A backend module that adds Confluent Cloud actions to a scaffolder
//! plugin. Its one action, `confluent:credentials:get`, reads the Confluent
//! Cloud API key and secret from configuration (the process environment by
//! default) and returns them to the template as the `apiKey` and
//! `apiSecret` outputs.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): action models, errors and port traits
//! - **Adapters** (`adapters`): configuration sources and the Confluent actions
//! - **Service Layer** (`services`): the in-process action registry
//! - **Infrastructure Layer** (`infrastructure`): configuration loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use confluent_actions::{ActionRegistry, ConfluentActionsModule, EnvConfigSource};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut registry = ActionRegistry::new();
//! registry.install(&ConfluentActionsModule::new(Arc::new(EnvConfigSource::new())))?;
//!
//! let outputs = registry
//!     .execute("confluent:credentials:get", serde_json::json!({}))
//!     .await?;
//! println!("{:?}", outputs.get_str("apiKey"));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::config_source::{EnvConfigSource, InMemoryConfigSource};
pub use adapters::plugins::confluent::{
    ConfluentActionsModule, GetConfluentCredentialsAction, GET_CREDENTIALS_ACTION_ID,
};
pub use adapters::plugins::create_actions;
pub use domain::models::{
    ActionContext, ActionDescriptor, ActionId, ActionOutput, ActionSchema, Config,
    CredentialPair, CredentialsConfig, LoggingConfig,
};
pub use domain::ports::{ActionsExtensionPoint, ActionsModule, ConfigSource, TemplateAction};
pub use domain::{ActionError, ActionResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::ActionRegistry;
