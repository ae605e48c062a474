use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::r#trait::{require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct MovePathTool {
    workdir: Workdir,
}

impl MovePathTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for MovePathTool {
    fn name(&self) -> &'static str {
        "move_path"
    }

    fn description(&self) -> &'static str {
        "Move a file or directory (with all its contents) within the working directory. The destination must not exist yet."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "source": {
                    "type": "string",
                    "description": "Relative path to move"
                },
                "destination": {
                    "type": "string",
                    "description": "Relative path to move it to"
                }
            },
            "required": ["source", "destination"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let source = require_str(&request.arguments, "source")?;
        let destination = require_str(&request.arguments, "destination")?;

        self.workdir.rename(source, destination).await?;

        Ok(format!("Path {source} moved to {destination}."))
    }
}
