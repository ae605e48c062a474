use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::tools::fuzzy_json;
use crate::tools::r#trait::{ToolDefinition, ToolExecutor, ToolRequest};

pub type SharedTool = Arc<dyn ToolExecutor>;

/// Name-keyed collection of tool executors: exports the definitions the
/// caller advertises to its model, and dispatches the calls the model makes.
pub struct ToolRegistry {
    tools: BTreeMap<String, SharedTool>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<SharedTool>) -> Self {
        let mut registry = Self {
            tools: BTreeMap::new(),
        };
        for tool in tools {
            registry.register_tool(tool);
        }
        registry
    }

    pub fn register_tool(&mut self, tool: SharedTool) {
        let name = tool.name().to_string();
        debug!(tool_name = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|name| name.as_str()).collect()
    }

    /// Dispatch a tool call by name. `Err` carries the message to surface to
    /// the model; resubmitting a corrected call is the caller's entire
    /// recovery path, so the message must say what was wrong.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Value,
        tool_use_id: &str,
    ) -> Result<String, String> {
        let Some(tool) = self.tools.get(name) else {
            let available = self.list_tools().join(", ");
            error!(tool_name = %name, "Unknown tool");
            return Err(format!("Unknown tool: {name}. Available tools: {available}"));
        };

        let schema = tool.input_schema();
        let arguments = match fuzzy_json::coerce_to_schema(&arguments, &schema) {
            Ok(arguments) => arguments,
            Err(e) => {
                error!(tool_name = %name, error = %e, "Failed to coerce tool arguments");
                return Err(format!(
                    "Invalid arguments for {name}: {e:#}.\nTry again with arguments matching the tool schema."
                ));
            }
        };

        debug!(tool_name = %name, tool_use_id, "Dispatching tool call");
        let request = ToolRequest::new(arguments, tool_use_id);
        tool.invoke(&request).await.map_err(|e| {
            error!(tool_name = %name, error = %e, "Tool call failed");
            format!("{e:#}\nTry again with a corrected call.")
        })
    }
}
