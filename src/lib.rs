pub mod error;
pub mod file;
pub mod settings;
pub mod tools;

// Public library API - the surrounding tool-calling layer only needs the
// workdir, the registry, and the error kinds; everything else is public for
// convenience but less stable.
pub use error::EditorError;
pub use file::workdir::Workdir;
pub use settings::{Settings, SettingsManager};
pub use tools::registry::ToolRegistry;
pub use tools::r#trait::{ToolDefinition, ToolExecutor, ToolRequest};
