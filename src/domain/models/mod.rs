//! Domain models

pub mod action;
pub mod config;
pub mod credentials;

pub use action::{ActionContext, ActionDescriptor, ActionId, ActionOutput, ActionSchema};
pub use config::{Config, CredentialsConfig, LoggingConfig};
pub use credentials::{CredentialPair, GetCredentialsInput};
