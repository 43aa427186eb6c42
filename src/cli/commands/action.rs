//! Implementation of the `list`, `describe` and `run` commands.

use anyhow::{anyhow, Context, Result};
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde_json::Value;

use crate::cli::output::{output, truncate, CommandOutput};
use crate::cli::types::RunArgs;
use crate::domain::models::action::{ActionDescriptor, ActionOutput};
use crate::domain::models::credentials::mask;
use crate::services::ActionRegistry;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
pub struct ActionListEntry {
    pub id: String,
    pub description: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ActionListOutput {
    pub actions: Vec<ActionListEntry>,
}

impl CommandOutput for ActionListOutput {
    fn to_human(&self) -> String {
        if self.actions.is_empty() {
            return "No actions registered.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("ID").add_attribute(Attribute::Bold),
                Cell::new("Description").add_attribute(Attribute::Bold),
            ]);

        for action in &self.actions {
            table.add_row(vec![
                Cell::new(&action.id),
                Cell::new(truncate(&action.description, 80)),
            ]);
        }

        table.to_string()
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ActionDescribeOutput {
    #[serde(flatten)]
    pub descriptor: ActionDescriptor,
}

impl CommandOutput for ActionDescribeOutput {
    fn to_human(&self) -> String {
        let schema = |value: &Value| {
            serde_yaml::to_string(value).unwrap_or_else(|_| value.to_string())
        };

        let mut lines = vec![
            format!("Action: {}", self.descriptor.id),
            format!("Description: {}", self.descriptor.description),
            "\nInput schema:".to_string(),
        ];
        lines.push(indent(&schema(&self.descriptor.schema.input)));
        lines.push("\nOutput schema:".to_string());
        lines.push(indent(&schema(&self.descriptor.schema.output)));
        lines.join("\n")
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ActionRunOutput {
    pub action: String,
    pub outputs: serde_json::Map<String, Value>,
    pub revealed: bool,
}

impl ActionRunOutput {
    /// Build the run result, masking every string output unless `reveal`.
    pub fn new(action: &str, outputs: &ActionOutput, reveal: bool) -> Self {
        let outputs = outputs
            .iter()
            .map(|(name, value)| {
                let shown = match value {
                    Value::String(s) if !reveal => Value::String(mask(s)),
                    other => other.clone(),
                };
                (name.clone(), shown)
            })
            .collect();

        Self {
            action: action.to_string(),
            outputs,
            revealed: reveal,
        }
    }
}

impl CommandOutput for ActionRunOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Action {} completed", self.action)];
        for (name, value) in &self.outputs {
            let shown = value
                .as_str()
                .map_or_else(|| value.to_string(), str::to_string);
            lines.push(format!("  {name}: {shown}"));
        }
        if !self.revealed && !self.outputs.is_empty() {
            lines.push("\nValues are masked; pass --reveal to print them.".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> Value {
        Value::Object(self.outputs.clone())
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

pub fn list(registry: &ActionRegistry, json_mode: bool) -> Result<()> {
    let actions = registry
        .descriptors()
        .into_iter()
        .map(|d| ActionListEntry {
            id: d.id.to_string(),
            description: d.description.clone(),
        })
        .collect();

    output(&ActionListOutput { actions }, json_mode);
    Ok(())
}

pub fn describe(registry: &ActionRegistry, id: &str, json_mode: bool) -> Result<()> {
    let action = registry
        .get(id)
        .ok_or_else(|| anyhow!("Action not found: {id}"))?;

    output(
        &ActionDescribeOutput {
            descriptor: action.descriptor().clone(),
        },
        json_mode,
    );
    Ok(())
}

pub async fn run(registry: &ActionRegistry, args: RunArgs, json_mode: bool) -> Result<()> {
    let input: Value =
        serde_json::from_str(&args.input).context("--input must be valid JSON")?;

    let outputs = registry
        .execute(&args.id, input)
        .await
        .with_context(|| format!("Action {} failed", args.id))?;

    output(&ActionRunOutput::new(&args.id, &outputs, args.reveal), json_mode);
    Ok(())
}
