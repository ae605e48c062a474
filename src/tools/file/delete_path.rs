use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::{NodeKind, Workdir};
use crate::tools::r#trait::{require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct DeletePathTool {
    workdir: Workdir,
}

impl DeletePathTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for DeletePathTool {
    fn name(&self) -> &'static str {
        "delete_path"
    }

    fn description(&self) -> &'static str {
        "Delete a file or directory in the working directory. CAUTION: deletes directories recursively with all their content, without confirmation."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file or directory to delete"
                }
            },
            "required": ["path"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;

        match self.workdir.remove(path).await? {
            NodeKind::File => Ok(format!("File {path} deleted.")),
            NodeKind::Directory => Ok(format!("Directory {path} deleted.")),
        }
    }
}
