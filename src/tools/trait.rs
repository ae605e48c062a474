use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::error::EditorError;

/// Request passed to tool execution.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// The arguments for the tool, as parsed from model output.
    pub arguments: Value,
    /// The unique ID for this tool use.
    pub tool_use_id: String,
}

impl ToolRequest {
    pub fn new(arguments: Value, tool_use_id: impl Into<String>) -> Self {
        Self {
            arguments,
            tool_use_id: tool_use_id.into(),
        }
    }
}

/// Definition handed to the caller so it can advertise the tool to its
/// model.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// A single editor operation exposed to an LLM agent.
///
/// The returned text is shown to the model verbatim and must be
/// self-describing: echo the affected path and enough of the resulting
/// state that a reader with no other state can plan its next call.
#[async_trait::async_trait(?Send)]
pub trait ToolExecutor {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> Value;

    async fn invoke(&self, request: &ToolRequest) -> Result<String>;
}

pub(crate) fn require_str<'a>(arguments: &'a Value, name: &str) -> Result<&'a str> {
    arguments
        .get(name)
        .and_then(|value| value.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing required parameter: {name}"))
}

pub(crate) fn optional_str<'a>(arguments: &'a Value, name: &str) -> Option<&'a str> {
    arguments.get(name).and_then(|value| value.as_str())
}

/// Extract a 1-based line-number argument. Negative values become
/// `InvalidRange` here; zero passes through so the patch engine can report
/// it with the rest of the range context.
pub(crate) fn require_line(arguments: &Value, name: &str) -> Result<usize> {
    let value = arguments
        .get(name)
        .and_then(|value| value.as_i64())
        .ok_or_else(|| anyhow::anyhow!("Missing required parameter: {name}"))?;

    usize::try_from(value).map_err(|_| {
        EditorError::invalid_range(format!("{name} must be a positive integer, got {value}")).into()
    })
}
