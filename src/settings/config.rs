use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_ignore_dirs() -> Vec<String> {
    [
        ".git",
        ".hg",
        ".svn",
        "__pycache__",
        ".venv",
        "venv",
        "node_modules",
        "target",
        ".idea",
        ".vscode",
        ".pytest_cache",
        ".mypy_cache",
        ".tox",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

/// Process-wide editor configuration. Read-only for the lifetime of the
/// operations; loaded once and handed to the tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Settings {
    /// Directory names rendered as opaque hidden leaves in tree output
    /// instead of being expanded (version-control metadata, virtual
    /// environments, caches).
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Settings {
    pub fn ignore_set(&self) -> HashSet<String> {
        self.ignore_dirs.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_common_tooling_directories() {
        let settings = Settings::default();
        let ignored = settings.ignore_set();
        for name in [".git", "__pycache__", ".venv", "node_modules", "target"] {
            assert!(ignored.contains(name), "expected {name} in default ignores");
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = toml::from_str("ignore_dirs = [\".git\"]").unwrap();
        assert_eq!(settings.ignore_dirs, vec![".git".to_string()]);
    }
}
