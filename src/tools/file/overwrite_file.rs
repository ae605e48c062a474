use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::file::rendered_content;
use crate::tools::r#trait::{require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct OverwriteFileTool {
    workdir: Workdir,
}

impl OverwriteFileTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for OverwriteFileTool {
    fn name(&self) -> &'static str {
        "overwrite_file"
    }

    fn description(&self) -> &'static str {
        "Replace the entire content of an existing file in the working directory. Use create_file for files that do not exist yet."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file to overwrite"
                },
                "content": {
                    "type": "string",
                    "description": "Complete new content of the file"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let content = require_str(&request.arguments, "content")?;

        self.workdir.overwrite(path, content).await?;

        Ok(format!(
            "Content of {path} overwritten.\n\n{}",
            rendered_content(path, content)
        ))
    }
}
