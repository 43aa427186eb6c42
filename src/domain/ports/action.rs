//! Action port traits.
//!
//! These define how actions are implemented and how modules hand them to a
//! host. The host (or the in-process [`ActionRegistry`]) only ever talks to
//! actions through [`TemplateAction`].
//!
//! [`ActionRegistry`]: crate::services::ActionRegistry

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ActionResult;
use crate::domain::models::action::{ActionContext, ActionDescriptor};

/// A schema-described unit of work invokable from a scaffolder template.
#[async_trait]
pub trait TemplateAction: Send + Sync {
    /// Returns the static descriptor of this action.
    fn descriptor(&self) -> &ActionDescriptor;

    /// Run the action.
    ///
    /// The handler reads its input from `ctx` and reports results through
    /// [`ActionContext::output`]. When the handler returns an error the
    /// caller must discard anything it wrote to `ctx`.
    async fn handler(&self, ctx: &mut ActionContext) -> ActionResult<()>;
}

/// Surface through which modules contribute actions to a host.
pub trait ActionsExtensionPoint {
    /// Add actions. Fails if any id is already taken.
    fn add_actions(&mut self, actions: Vec<Arc<dyn TemplateAction>>) -> ActionResult<()>;
}

/// A backend module that extends a plugin with extra actions.
pub trait ActionsModule: Send + Sync {
    /// Id of the plugin this module extends.
    fn plugin_id(&self) -> &'static str;

    /// Id of this module within the plugin.
    fn module_id(&self) -> &'static str;

    /// Register this module's actions.
    fn init(&self, actions: &mut dyn ActionsExtensionPoint) -> ActionResult<()>;
}
