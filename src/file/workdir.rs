use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{DenyReason, EditorError};
use crate::file::patch;
use crate::file::resolver::WorkingRoot;
use crate::file::tree;

/// What `remove` deleted, so replies can say which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A directory entry as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Sandboxed filesystem operations over a single working root.
///
/// Every method resolves its path arguments fresh against the live tree;
/// the filesystem itself is the only state between calls. There is no undo
/// log and no transaction - each call is an independent, immediately
/// committed mutation. All project-tree I/O in the crate goes through this
/// type.
///
/// The working root itself can be read and listed but never removed,
/// moved, or overwritten.
#[derive(Debug, Clone)]
pub struct Workdir {
    root: WorkingRoot,
}

impl Workdir {
    pub fn new(root: WorkingRoot) -> Self {
        Self { root }
    }

    /// Open a working root directory. It must already exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        Ok(Self {
            root: WorkingRoot::open(path)?,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn resolve(&self, rel: Option<&str>) -> Result<PathBuf, EditorError> {
        self.root.resolve(rel)
    }

    /// Read the full content of a file.
    pub async fn read(&self, rel: &str) -> Result<String, EditorError> {
        let path = self.root.resolve(Some(rel))?;
        let metadata = require_exists(rel, &path).await?;
        if metadata.is_dir() {
            return Err(EditorError::IsADirectory {
                path: rel.to_string(),
            });
        }

        fs::read_to_string(&path)
            .await
            .map_err(|source| EditorError::io(rel, source))
    }

    /// Create a new file, creating missing parent directories. Strict: any
    /// existing node at the path is an error, never a truncation.
    pub async fn create_file(&self, rel: &str, content: &str) -> Result<(), EditorError> {
        let path = self.root.resolve(Some(rel))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| EditorError::io(rel, source))?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => EditorError::already_exists(rel),
                _ => EditorError::io(rel, source),
            })?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|source| EditorError::io(rel, source))?;
        file.flush()
            .await
            .map_err(|source| EditorError::io(rel, source))?;

        info!(path = rel, "Created file");
        Ok(())
    }

    /// Create a directory and any missing parents. The terminal component
    /// must not exist yet.
    pub async fn create_dir(&self, rel: &str) -> Result<(), EditorError> {
        let path = self.root.resolve(Some(rel))?;
        if fs::symlink_metadata(&path).await.is_ok() {
            return Err(EditorError::already_exists(rel));
        }

        fs::create_dir_all(&path)
            .await
            .map_err(|source| EditorError::io(rel, source))?;

        info!(path = rel, "Created directory");
        Ok(())
    }

    /// Replace the entire content of an existing file. Readers never observe
    /// a partial write: content goes to a sibling temp file which is then
    /// renamed over the target.
    pub async fn overwrite(&self, rel: &str, content: &str) -> Result<(), EditorError> {
        let path = self.root.resolve(Some(rel))?;
        let metadata = require_exists(rel, &path).await?;
        if metadata.is_dir() {
            return Err(EditorError::IsADirectory {
                path: rel.to_string(),
            });
        }

        let parent = path.parent().unwrap_or_else(|| self.root.path());
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|source| EditorError::io(rel, source))?;
        io::Write::write_all(&mut tmp, content.as_bytes())
            .map_err(|source| EditorError::io(rel, source))?;
        tmp.persist(&path)
            .map_err(|source| EditorError::io(rel, source.error))?;

        info!(path = rel, bytes = content.len(), "Overwrote file");
        Ok(())
    }

    /// Replace lines `[start_line, end_line)` with `new_content` and return
    /// the updated content. `start_line == end_line` inserts.
    pub async fn replace_lines(
        &self,
        rel: &str,
        start_line: usize,
        end_line: usize,
        new_content: &str,
    ) -> Result<String, EditorError> {
        let content = self.read(rel).await?;
        let updated = patch::replace_span(&content, start_line, end_line, new_content)?;
        self.overwrite(rel, &updated).await?;

        info!(path = rel, start_line, end_line, "Replaced line range");
        Ok(updated)
    }

    /// Remove lines `[start_line, end_line)` and return the updated content.
    pub async fn delete_lines(
        &self,
        rel: &str,
        start_line: usize,
        end_line: usize,
    ) -> Result<String, EditorError> {
        let content = self.read(rel).await?;
        let updated = patch::delete_span(&content, start_line, end_line)?;
        self.overwrite(rel, &updated).await?;

        info!(path = rel, start_line, end_line, "Deleted line range");
        Ok(updated)
    }

    /// Insert `content` before `cursor_line` and return the updated content.
    pub async fn insert_lines(
        &self,
        rel: &str,
        cursor_line: usize,
        content: &str,
    ) -> Result<String, EditorError> {
        let current = self.read(rel).await?;
        let updated = patch::insert_before(&current, cursor_line, content)?;
        self.overwrite(rel, &updated).await?;

        info!(path = rel, cursor_line, "Inserted lines");
        Ok(updated)
    }

    /// Move a file or directory (recursively) inside the root.
    pub async fn rename(&self, src_rel: &str, dst_rel: &str) -> Result<(), EditorError> {
        let src = self.root.resolve(Some(src_rel))?;
        if src == self.root.path() {
            return Err(EditorError::access_denied(src_rel, DenyReason::EscapesRoot));
        }
        let dst = self.root.resolve(Some(dst_rel))?;

        require_exists(src_rel, &src).await?;
        if fs::symlink_metadata(&dst).await.is_ok() {
            return Err(EditorError::already_exists(dst_rel));
        }
        // No implicit parent creation outside of create_file/create_dir: a
        // missing destination directory is the caller's mistake to fix.
        if let Some(parent) = dst.parent() {
            if fs::symlink_metadata(parent).await.is_err() {
                return Err(EditorError::not_found(dst_rel));
            }
        }

        fs::rename(&src, &dst)
            .await
            .map_err(|source| EditorError::io(src_rel, source))?;

        info!(source = src_rel, destination = dst_rel, "Moved path");
        Ok(())
    }

    /// Delete a file, or a directory with all of its contents. Unconditional
    /// and irreversible; any confirmation gating belongs to the caller.
    pub async fn remove(&self, rel: &str) -> Result<NodeKind, EditorError> {
        let path = self.root.resolve(Some(rel))?;
        if path == self.root.path() {
            return Err(EditorError::access_denied(rel, DenyReason::EscapesRoot));
        }
        let metadata = require_exists(rel, &path).await?;

        if metadata.is_dir() {
            fs::remove_dir_all(&path)
                .await
                .map_err(|source| EditorError::io(rel, source))?;
            info!(path = rel, "Deleted directory");
            Ok(NodeKind::Directory)
        } else {
            fs::remove_file(&path)
                .await
                .map_err(|source| EditorError::io(rel, source))?;
            info!(path = rel, "Deleted file");
            Ok(NodeKind::File)
        }
    }

    /// Non-recursive listing: entry names and kinds, sorted by name.
    /// Symlinked entries are omitted - no operation could touch them anyway.
    pub async fn list(&self, rel: Option<&str>) -> Result<Vec<Entry>, EditorError> {
        let display = rel.unwrap_or(".");
        let path = self.root.resolve(rel)?;
        let metadata = require_exists(display, &path).await?;
        if !metadata.is_dir() {
            return Err(EditorError::NotADirectory {
                path: display.to_string(),
            });
        }

        let mut reader = fs::read_dir(&path)
            .await
            .map_err(|source| EditorError::io(display, source))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|source| EditorError::io(display, source))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| EditorError::io(display, source))?;
            if file_type.is_symlink() {
                continue;
            }
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    /// Recursive tagged tree rendering, with `ignore_dirs` collapsed to
    /// hidden leaves.
    pub async fn render_tree(
        &self,
        rel: Option<&str>,
        ignore_dirs: &HashSet<String>,
    ) -> Result<String, EditorError> {
        let display = rel.unwrap_or(".");
        let path = self.root.resolve(rel)?;
        let metadata = require_exists(display, &path).await?;
        if !metadata.is_dir() {
            return Err(EditorError::NotADirectory {
                path: display.to_string(),
            });
        }

        tree::render(&path, ignore_dirs).map_err(|source| EditorError::io(display, source))
    }
}

async fn require_exists(rel: &str, path: &Path) -> Result<std::fs::Metadata, EditorError> {
    match fs::symlink_metadata(path).await {
        Ok(metadata) => Ok(metadata),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(EditorError::not_found(rel))
        }
        Err(source) => Err(EditorError::io(rel, source)),
    }
}
