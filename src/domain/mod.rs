//! Domain layer for scaffolder actions
//!
//! This module contains the action models, their errors and the ports that
//! adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ActionError, ActionResult};
