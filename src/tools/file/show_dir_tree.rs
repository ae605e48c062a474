use anyhow::Result;
use serde_json::{json, Value};

use crate::file::workdir::Workdir;
use crate::settings::SettingsManager;
use crate::tools::r#trait::{optional_str, ToolExecutor, ToolRequest};

#[derive(Clone)]
pub struct ShowDirTreeTool {
    workdir: Workdir,
    settings: SettingsManager,
}

impl ShowDirTreeTool {
    pub fn new(workdir: Workdir, settings: SettingsManager) -> Self {
        Self { workdir, settings }
    }
}

#[async_trait::async_trait(?Send)]
impl ToolExecutor for ShowDirTreeTool {
    fn name(&self) -> &'static str {
        "show_dir_tree"
    }

    fn description(&self) -> &'static str {
        "Show a tree representation of a directory in the working directory. Shows the working directory itself if no path is provided. Tooling directories (version control metadata, virtual environments, caches) appear as hidden leaves."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of the directory to show; the working directory if omitted"
                }
            },
            "required": []
        })
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<String> {
        let path = optional_str(&request.arguments, "path");
        let ignore_dirs = self.settings.settings().ignore_set();

        let rendered = self.workdir.render_tree(path, &ignore_dirs).await?;
        Ok(rendered)
    }
}
