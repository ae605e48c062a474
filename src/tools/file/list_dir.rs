use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::r#trait::{optional_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct ListDirTool {
    workdir: Workdir,
}

impl ListDirTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for ListDirTool {
    fn name(&self) -> &'static str {
        "list_dir"
    }

    fn description(&self) -> &'static str {
        "List the entries of a directory in the working directory. Lists the working directory itself if no path is provided."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the directory to list; the working directory if omitted"
                }
            },
            "required": []
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = optional_str(&request.arguments, "path");
        let display = path.unwrap_or(".");

        let entries = self.workdir.list(path).await?;

        // An empty directory must be distinguishable from a failed call.
        if entries.is_empty() {
            return Ok(format!("Directory {display} is empty."));
        }

        let listing = entries
            .iter()
            .map(|entry| {
                if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!("Contents of {display}:\n{listing}"))
    }
}
