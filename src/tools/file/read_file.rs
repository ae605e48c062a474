use anyhow::Result;
use serde_json::{json, Value};

use crate::file::patch;
use crate::file::workdir::Workdir;
use crate::tools::r#trait::{require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct ReadFileTool {
    workdir: Workdir,
}

impl ReadFileTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for ReadFileTool {
    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &'static str {
        "Read the content of a file in the working directory, shown with 1-based line numbers"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file to read"
                }
            },
            "required": ["path"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let content = self.workdir.read(path).await?;

        // An empty file must be distinguishable from a failed call.
        if content.is_empty() {
            return Ok(format!("File {path} is empty."));
        }
        Ok(format!(
            "Content of {path}:\n\n{}",
            patch::number_lines(&content)
        ))
    }
}
