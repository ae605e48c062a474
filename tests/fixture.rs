//! Shared setup for registry-driven tests: a temp working directory plus a
//! registry holding every editor tool, driven the way the dispatch layer
//! would drive it - by name, with raw JSON arguments.

use std::path::PathBuf;

use patchbay::tools::file::editor_tools;
use patchbay::{SettingsManager, ToolRegistry, Workdir};

pub struct Fixture {
    _temp: tempfile::TempDir,
    pub project: PathBuf,
    pub registry: ToolRegistry,
}

pub fn setup() -> Fixture {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir(&project).unwrap();

    let workdir = Workdir::open(&project).unwrap();
    let settings = SettingsManager::from_path(temp.path().join("settings.toml")).unwrap();
    let registry = ToolRegistry::new(editor_tools(workdir, settings));

    Fixture {
        _temp: temp,
        project,
        registry,
    }
}

impl Fixture {
    pub async fn call(&self, tool: &str, arguments: &str) -> Result<String, String> {
        let arguments: serde_json::Value = serde_json::from_str(arguments).unwrap();
        self.registry
            .dispatch(tool, arguments, "test-tool-use")
            .await
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.project.join(rel)).unwrap()
    }

    pub fn write(&self, rel: &str, content: &str) {
        std::fs::write(self.project.join(rel), content).unwrap()
    }
}
