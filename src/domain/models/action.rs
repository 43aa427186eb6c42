//! Action domain models.
//!
//! An action is a named, schema-described unit of work that a scaffolder
//! template can invoke. Each action declares an [`ActionDescriptor`] (id,
//! description, input/output JSON schemas) and writes its results into an
//! [`ActionContext`] while it runs.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::errors::{ActionError, ActionResult};

/// Stable identifier an action is registered under.
///
/// One or more `:`-separated segments, each made of lowercase ASCII letters,
/// digits, `-` or `_` (e.g. `confluent:credentials:get`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionId(String);

impl ActionId {
    /// Parse and validate an action id.
    pub fn parse(id: impl Into<String>) -> ActionResult<Self> {
        let id = id.into();
        let invalid = |reason: &str| ActionError::InvalidActionId {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(invalid("id cannot be empty"));
        }

        for segment in id.split(':') {
            if segment.is_empty() {
                return Err(invalid("segments cannot be empty"));
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
            {
                return Err(invalid(
                    "segments may only contain lowercase letters, digits, '-' and '_'",
                ));
            }
        }

        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ActionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ActionId {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ActionId {
    type Error = ActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ActionId> for String {
    fn from(id: ActionId) -> Self {
        id.0
    }
}

/// Input and output JSON schemas of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSchema {
    /// Schema the invocation input must satisfy.
    pub input: Value,
    /// Schema the collected outputs must satisfy.
    pub output: Value,
}

impl ActionSchema {
    /// Derive both schemas from Rust types.
    pub fn for_types<I: JsonSchema, O: JsonSchema>() -> ActionResult<Self> {
        Ok(Self {
            input: schema_value::<I>()?,
            output: schema_value::<O>()?,
        })
    }
}

fn schema_value<T: JsonSchema>() -> ActionResult<Value> {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).map_err(|e| ActionError::InvalidSchema {
        action: T::schema_name().into_owned(),
        reason: e.to_string(),
    })
}

/// Static description of an action: what it is called, what it does and
/// what it consumes and produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Registration id.
    pub id: ActionId,
    /// Human readable description.
    pub description: String,
    /// Input and output schemas.
    pub schema: ActionSchema,
}

impl ActionDescriptor {
    /// Create a descriptor.
    pub fn new(id: ActionId, description: impl Into<String>, schema: ActionSchema) -> Self {
        Self {
            id,
            description: description.into(),
            schema,
        }
    }
}

/// Named outputs produced by one action invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionOutput(Map<String, Value>);

impl ActionOutput {
    /// Look up an output by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Look up a string output by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The outputs as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    fn insert(&mut self, name: String, value: Value) {
        self.0.insert(name, value);
    }
}

/// Per-invocation context handed to an action handler.
///
/// Carries the validated input and collects the outputs the handler emits.
/// A context is created fresh for every invocation and never shared.
#[derive(Debug)]
pub struct ActionContext {
    run_id: Uuid,
    action_id: ActionId,
    input: Map<String, Value>,
    outputs: ActionOutput,
}

impl ActionContext {
    /// Create a context for a single invocation of `action_id`.
    pub fn new(action_id: ActionId, input: Map<String, Value>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            action_id,
            input,
            outputs: ActionOutput::default(),
        }
    }

    /// Unique id of this invocation, used to correlate log events.
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub const fn action_id(&self) -> &ActionId {
        &self.action_id
    }

    pub const fn input(&self) -> &Map<String, Value> {
        &self.input
    }

    /// Emit a named output. A later call with the same name overwrites it.
    pub fn output(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.outputs.insert(name.into(), value.into());
    }

    pub const fn outputs(&self) -> &ActionOutput {
        &self.outputs
    }

    /// Consume the context, returning the collected outputs.
    pub fn into_outputs(self) -> ActionOutput {
        self.outputs
    }
}
