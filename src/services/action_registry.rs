//! Action registry.
//!
//! The [`ActionRegistry`] maps action ids to their handlers and compiled
//! schemas. It is the in-process stand-in for a host's action registry:
//! modules add actions through [`ActionsExtensionPoint`], and callers invoke
//! them by id with [`ActionRegistry::execute`], which validates the input
//! before the handler runs and the outputs after it returns.

use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{ActionError, ActionResult};
use crate::domain::models::action::{ActionContext, ActionDescriptor, ActionId, ActionOutput};
use crate::domain::ports::{ActionsExtensionPoint, ActionsModule, TemplateAction};

struct RegisteredAction {
    action: Arc<dyn TemplateAction>,
    input: Validator,
    output: Validator,
}

impl RegisteredAction {
    fn compile(action: Arc<dyn TemplateAction>) -> ActionResult<Self> {
        let descriptor = action.descriptor();
        let compile = |schema: &Value| {
            jsonschema::validator_for(schema).map_err(|e| ActionError::InvalidSchema {
                action: descriptor.id.to_string(),
                reason: e.to_string(),
            })
        };

        let input = compile(&descriptor.schema.input)?;
        let output = compile(&descriptor.schema.output)?;

        Ok(Self {
            action,
            input,
            output,
        })
    }
}

/// Collect all schema violations for `instance` into one message.
fn violations(validator: &Validator, instance: &Value) -> Option<String> {
    let messages: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

/// Central registry of scaffolder actions.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<ActionId, RegisteredAction>,
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.actions.keys().map(ActionId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("actions", &ids)
            .finish()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single action.
    pub fn register(&mut self, action: Arc<dyn TemplateAction>) -> ActionResult<()> {
        self.add_actions(vec![action])
    }

    /// Let a module register its actions.
    #[instrument(skip_all, fields(plugin_id = module.plugin_id(), module_id = module.module_id()))]
    pub fn install(&mut self, module: &dyn ActionsModule) -> ActionResult<()> {
        module.init(self)?;
        info!(total_actions = self.actions.len(), "Module installed");
        Ok(())
    }

    /// Look up an action by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn TemplateAction>> {
        self.actions.get(id).map(|entry| Arc::clone(&entry.action))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Descriptors of all registered actions, sorted by id.
    pub fn descriptors(&self) -> Vec<&ActionDescriptor> {
        let mut descriptors: Vec<&ActionDescriptor> = self
            .actions
            .values()
            .map(|entry| entry.action.descriptor())
            .collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Invoke an action by id.
    ///
    /// A missing or `null` input is treated as an empty object. Outputs
    /// written by a handler that fails are discarded; the caller only ever
    /// sees the error.
    #[instrument(skip_all, fields(action_id = %id))]
    pub async fn execute(&self, id: &str, input: Value) -> ActionResult<ActionOutput> {
        let (action_id, entry) = self
            .actions
            .get_key_value(id)
            .ok_or_else(|| ActionError::ActionNotFound(id.to_string()))?;

        let input = match input {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        if let Some(reason) = violations(&entry.input, &input) {
            warn!(%reason, "Rejected action input");
            return Err(ActionError::InvalidInput {
                action: id.to_string(),
                reason,
            });
        }

        let Value::Object(input) = input else {
            return Err(ActionError::InvalidInput {
                action: id.to_string(),
                reason: "input must be a JSON object".to_string(),
            });
        };

        let mut ctx = ActionContext::new(action_id.clone(), input);
        debug!(run_id = %ctx.run_id(), "Executing action");

        entry.action.handler(&mut ctx).await?;

        let outputs = ctx.into_outputs();
        if let Some(reason) = violations(&entry.output, &outputs.to_value()) {
            warn!(%reason, "Action produced invalid output");
            return Err(ActionError::InvalidOutput {
                action: id.to_string(),
                reason,
            });
        }

        debug!(output_count = outputs.len(), "Action completed");
        Ok(outputs)
    }
}

impl ActionsExtensionPoint for ActionRegistry {
    /// Add actions atomically: either every action is registered or none is.
    fn add_actions(&mut self, actions: Vec<Arc<dyn TemplateAction>>) -> ActionResult<()> {
        let mut compiled: Vec<(ActionId, RegisteredAction)> = Vec::with_capacity(actions.len());

        for action in actions {
            let id = action.descriptor().id.clone();
            let taken = self.actions.contains_key(&id)
                || compiled.iter().any(|(other, _)| *other == id);
            if taken {
                return Err(ActionError::DuplicateAction(id.to_string()));
            }
            compiled.push((id, RegisteredAction::compile(action)?));
        }

        for (id, entry) in compiled {
            info!(action_id = %id, "Registering action");
            self.actions.insert(id, entry);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::action::ActionSchema;
    use async_trait::async_trait;
    use serde_json::json;

    /// Echoes `input.message` back as the `message` output.
    struct EchoAction {
        descriptor: ActionDescriptor,
    }

    impl EchoAction {
        fn new(id: &str) -> Self {
            Self {
                descriptor: ActionDescriptor::new(
                    ActionId::parse(id).unwrap(),
                    "echo",
                    ActionSchema {
                        input: json!({
                            "type": "object",
                            "properties": {"message": {"type": "string"}},
                        }),
                        output: json!({
                            "type": "object",
                            "properties": {"message": {"type": "string"}},
                        }),
                    },
                ),
            }
        }
    }

    #[async_trait]
    impl TemplateAction for EchoAction {
        fn descriptor(&self) -> &ActionDescriptor {
            &self.descriptor
        }

        async fn handler(&self, ctx: &mut ActionContext) -> ActionResult<()> {
            let message = ctx.input().get("message").cloned().unwrap_or(Value::Null);
            if !message.is_null() {
                ctx.output("message", message);
            }
            Ok(())
        }
    }

    /// Writes an output, then fails.
    struct FailingAction {
        descriptor: ActionDescriptor,
    }

    #[async_trait]
    impl TemplateAction for FailingAction {
        fn descriptor(&self) -> &ActionDescriptor {
            &self.descriptor
        }

        async fn handler(&self, ctx: &mut ActionContext) -> ActionResult<()> {
            ctx.output("partial", "value");
            Err(ActionError::MissingConfiguration {
                keys: vec!["A".to_string(), "B".to_string()],
            })
        }
    }

    /// Emits a number where the schema wants a string.
    struct BadOutputAction {
        descriptor: ActionDescriptor,
    }

    #[async_trait]
    impl TemplateAction for BadOutputAction {
        fn descriptor(&self) -> &ActionDescriptor {
            &self.descriptor
        }

        async fn handler(&self, ctx: &mut ActionContext) -> ActionResult<()> {
            ctx.output("value", 42);
            Ok(())
        }
    }

    fn descriptor(id: &str, output: Value) -> ActionDescriptor {
        ActionDescriptor::new(
            ActionId::parse(id).unwrap(),
            "test",
            ActionSchema {
                input: json!({"type": "object"}),
                output,
            },
        )
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = ActionRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.descriptors().is_empty());
        assert!(registry.get("test:echo").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("test:echo"))).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test:echo"));
        assert_eq!(
            registry.get("test:echo").unwrap().descriptor().id.as_str(),
            "test:echo"
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("test:echo"))).unwrap();

        let err = registry
            .register(Arc::new(EchoAction::new("test:echo")))
            .unwrap_err();
        assert!(matches!(err, ActionError::DuplicateAction(id) if id == "test:echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_actions_is_atomic() {
        let mut registry = ActionRegistry::new();
        let batch: Vec<Arc<dyn TemplateAction>> = vec![
            Arc::new(EchoAction::new("test:one")),
            Arc::new(EchoAction::new("test:two")),
            Arc::new(EchoAction::new("test:one")),
        ];

        assert!(registry.add_actions(batch).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let mut registry = ActionRegistry::new();
        let action = BadOutputAction {
            descriptor: descriptor("test:bad-schema", json!({"type": 12})),
        };

        let err = registry.register(Arc::new(action)).unwrap_err();
        assert!(matches!(err, ActionError::InvalidSchema { .. }));
    }

    #[test]
    fn test_descriptors_sorted_by_id() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("zeta:run"))).unwrap();
        registry.register(Arc::new(EchoAction::new("alpha:run"))).unwrap();

        let ids: Vec<&str> = registry
            .descriptors()
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["alpha:run", "zeta:run"]);
    }

    #[tokio::test]
    async fn test_execute_unknown_action() {
        let registry = ActionRegistry::new();
        let err = registry.execute("test:missing", json!({})).await.unwrap_err();
        assert!(matches!(err, ActionError::ActionNotFound(id) if id == "test:missing"));
    }

    #[tokio::test]
    async fn test_execute_passes_input_through() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("test:echo"))).unwrap();

        let outputs = registry
            .execute("test:echo", json!({"message": "hello"}))
            .await
            .unwrap();
        assert_eq!(outputs.get_str("message"), Some("hello"));
    }

    #[tokio::test]
    async fn test_execute_null_input_is_empty_object() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("test:echo"))).unwrap();

        let outputs = registry.execute("test:echo", Value::Null).await.unwrap();
        assert!(outputs.is_empty());
    }

    #[tokio::test]
    async fn test_execute_rejects_input_violating_schema() {
        let mut registry = ActionRegistry::new();
        registry.register(Arc::new(EchoAction::new("test:echo"))).unwrap();

        let err = registry
            .execute("test:echo", json!({"message": 5}))
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput { .. }));

        let err = registry.execute("test:echo", json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_execute_discards_outputs_of_failed_handler() {
        let mut registry = ActionRegistry::new();
        registry
            .register(Arc::new(FailingAction {
                descriptor: descriptor("test:fail", json!({"type": "object"})),
            }))
            .unwrap();

        let err = registry.execute("test:fail", json!({})).await.unwrap_err();
        assert!(err.is_missing_configuration());
    }

    #[tokio::test]
    async fn test_execute_rejects_output_violating_schema() {
        let mut registry = ActionRegistry::new();
        registry
            .register(Arc::new(BadOutputAction {
                descriptor: descriptor(
                    "test:bad-output",
                    json!({
                        "type": "object",
                        "properties": {"value": {"type": "string"}},
                    }),
                ),
            }))
            .unwrap();

        let err = registry
            .execute("test:bad-output", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidOutput { .. }));
    }
}
