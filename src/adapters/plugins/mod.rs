//! Native action plugins.
//!
//! Each sub-module corresponds to an external system and provides actions
//! that implement the domain port traits directly.

pub mod confluent;

use std::sync::Arc;

use crate::domain::errors::ActionResult;
use crate::domain::models::config::CredentialsConfig;
use crate::domain::ports::{ConfigSource, TemplateAction};

use self::confluent::ConfluentActionsModule;

/// Build the complete scaffolder action list for hosts that wire actions by
/// hand instead of through an extension point.
///
/// The host's built-in actions come first, in the order given, followed by
/// the Confluent actions.
pub fn create_actions(
    builtins: Vec<Arc<dyn TemplateAction>>,
    source: Arc<dyn ConfigSource>,
    credentials: CredentialsConfig,
) -> ActionResult<Vec<Arc<dyn TemplateAction>>> {
    let mut actions = builtins;
    actions.extend(ConfluentActionsModule::with_config(source, credentials).actions()?);
    Ok(actions)
}
