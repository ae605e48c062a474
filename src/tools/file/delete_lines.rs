use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::file::rendered_content;
use crate::tools::r#trait::{require_line, require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct DeleteLinesTool {
    workdir: Workdir,
}

impl DeleteLinesTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for DeleteLinesTool {
    fn name(&self) -> &'static str {
        "delete_lines"
    }

    fn description(&self) -> &'static str {
        "Delete lines [start_line, end_line) from a file in the working directory. \
         end_line is exclusive and must be greater than start_line; an empty range \
         is an error, not a no-op."
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
                    "description": "First line to delete, 1-based, inclusive"
                },
                "end_line": {
                    "type": "integer",
                    "description": "End of the range, 1-based, exclusive"
                }
            },
            "required": ["path", "start_line", "end_line"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let start_line = require_line(&request.arguments, "start_line")?;
        let end_line = require_line(&request.arguments, "end_line")?;

        let updated = self
            .workdir
            .delete_lines(path, start_line, end_line)
            .await?;

        Ok(format!(
            "Deleted lines {start_line} to {end_line} (exclusive) from {path}.\n\n{}",
            rendered_content(path, &updated)
        ))
    }
}
