//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ConfigSource`: read-only configuration lookup injected into actions
//! - `TemplateAction`: a schema-described scaffolder action
//! - `ActionsExtensionPoint` / `ActionsModule`: how modules contribute actions
//!
//! Adapters in `crate::adapters` implement these; the domain never depends on
//! a concrete source or host.

pub mod action;
pub mod config_source;

pub use action::{ActionsExtensionPoint, ActionsModule, TemplateAction};
pub use config_source::ConfigSource;
