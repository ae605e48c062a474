use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::file::rendered_content;
use crate::tools::r#trait::{optional_str, require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct CreateFileTool {
    workdir: Workdir,
}

impl CreateFileTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for CreateFileTool {
    fn name(&self) -> &'static str {
        "create_file"
    }

    fn description(&self) -> &'static str {
        "Create a file in the working directory, with optional initial content. Fails if something already exists at the path; it never overwrites."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file to create"
                },
                "content": {
                    "type": "string",
                    "description": "Initial content; empty if omitted"
                }
            },
            "required": ["path"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let content = optional_str(&request.arguments, "content").unwrap_or("");

        self.workdir.create_file(path, content).await?;

        if content.is_empty() {
            return Ok(format!("File {path} created."));
        }
        Ok(format!(
            "File {path} created.\n\n{}",
            rendered_content(path, content)
        ))
    }
}
