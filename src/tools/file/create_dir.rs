use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::tools::r#trait::{require_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct CreateDirTool {
    workdir: Workdir,
}

impl CreateDirTool {
    pub fn new(workdir: Workdir) -> Self {
        Self { workdir }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for CreateDirTool {
    fn name(&self) -> &'static str {
        "create_dir"
    }

    fn description(&self) -> &'static str {
        "Create a directory (and any missing parents) in the working directory"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the directory to create"
                }
            },
            "required": ["path"]
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = require_str(&request.arguments, "path")?;
        self.workdir.create_dir(path).await?;
        Ok(format!("Directory {path} created."))
    }
}
