use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::file::rendered_content;
use crate::tools::r#trait::{require_line, require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct InsertLinesTool {
    workdir: Workdir,
}

impl InsertLinesTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for InsertLinesTool {
    fn name(&self) -> &'static str {
        "insert_lines"
    }

    fn description(&self) -> &'static str {
        "Insert content before a line of a file in the working directory, pushing \
         later lines down. cursor_line may be the line count plus one to append at \
         the end. Include proper indentation."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the file to modify"
                },
                "cursor_line": {
                    "type": "integer",
                    "description": "Line to insert before, 1-based; line count + 1 appends"
                },
                "content": {
                    "type": "string",
                    "description": "Lines to insert. Include proper indentation"
                }
            },
            "required": ["path", "cursor_line", "content"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        let cursor_line = require_line(&request.arguments, "cursor_line")?;
        let content = require_str(&request.arguments, "content")?;

        let updated = self
            .workdir
            .insert_lines(path, cursor_line, content)
            .await?;

        Ok(format!(
            "Content inserted into {path} before line {cursor_line}.\n\n{}",
            rendered_content(path, &updated)
        ))
    }
}
