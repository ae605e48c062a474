use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::file::rendered_content;
use crate::tools::r#trait::{require_line, require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct ReplaceLinesTool {
    workdir: Workdir,
}

impl ReplaceLinesTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for ReplaceLinesTool {
    fn name(&self) -> &'static str {
        "replace_lines"
    }

    fn description(&self) -> &'static str {
        "Replace a line range of a file in the working directory. \
         Line numbers are 1-based and address the file as it is on disk right now; \
         end_line is exclusive, so lines [start_line, end_line) are replaced. \
         Use start_line = end_line to insert without removing anything, and empty \
         new_content to delete the range. Always read the file first; the reply \
         shows the updated numbering to use for the next edit."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file to modify"
                },
                "start_line": {
                    "type": "integer",
                    "description": "First line of the range, 1-based, inclusive"
                },
                "end_line": {
                    "type": "integer",
                    "description": "End of the range, 1-based, exclusive"
                },
                "new_content": {
                    "type": "string",
                    "description": "Replacement lines. Include proper indentation; may be empty to delete the range"
                }
            },
            "required": ["path", "start_line", "end_line", "new_content"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let start_line = require_line(&request.arguments, "start_line")?;
        let end_line = require_line(&request.arguments, "end_line")?;
        let new_content = require_str(&request.arguments, "new_content")?;

        let updated = self
            .workdir
            .replace_lines(path, start_line, end_line, new_content)
            .await?;

        Ok(format!(
            "Content of {path} replaced from line {start_line} to {end_line} (exclusive).\n\n{}",
            rendered_content(path, &updated)
        ))
    }
}
