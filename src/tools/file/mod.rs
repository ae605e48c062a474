//! One executor per editor operation.
//!
//! Every mutating tool replies with a fresh line-numbered rendering of the
//! resulting content. The caller is a stateless model; its next edit will
//! be expressed in the file's *new* numbering, which it only knows from
//! these replies.

pub mod create_dir;
pub mod create_file;
pub mod delete_lines;
pub mod delete_path;
pub mod insert_lines;
pub mod list_dir;
pub mod move_path;
pub mod overwrite_file;
pub mod read_file;
pub mod replace_lines;
pub mod show_dir_tree;

use std::sync::Arc;

use crate::file::patch;
use crate::file::workdir::Workdir;
use crate::settings::SettingsManager;
use crate::tools::registry::SharedTool;

/// All editor tools over one working directory, ready for a registry.
pub fn editor_tools(workdir: Workdir, settings: SettingsManager) -> Vec<SharedTool> {
    vec![
        Arc::new(create_dir::CreateDirTool::new(workdir.clone())),
        Arc::new(create_file::CreateFileTool::new(workdir.clone())),
        Arc::new(read_file::ReadFileTool::new(workdir.clone())),
        Arc::new(overwrite_file::OverwriteFileTool::new(workdir.clone())),
        Arc::new(replace_lines::ReplaceLinesTool::new(workdir.clone())),
        Arc::new(delete_lines::DeleteLinesTool::new(workdir.clone())),
        Arc::new(insert_lines::InsertLinesTool::new(workdir.clone())),
        Arc::new(move_path::MovePathTool::new(workdir.clone())),
        Arc::new(delete_path::DeletePathTool::new(workdir.clone())),
        Arc::new(list_dir::ListDirTool::new(workdir.clone())),
        Arc::new(show_dir_tree::ShowDirTreeTool::new(workdir, settings)),
    ]
}

/// Numbered rendering of a file's content for a tool reply.
pub(crate) fn rendered_content(path: &str, content: &str) -> String {
    if content.is_empty() {
        return format!("File {path} is now empty.");
    }
    format!(
        "File content\n------------\n{}",
        patch::number_lines(content)
    )
}
