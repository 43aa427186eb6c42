//! Service layer: coordinates actions on behalf of callers.

pub mod action_registry;

pub use action_registry::ActionRegistry;
