use std::fmt;
use std::io;

use thiserror::Error;

/// Why path resolution refused an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    AbsolutePath,
    EscapesRoot,
    SymbolicLink,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::AbsolutePath => write!(f, "absolute paths are not permitted"),
            DenyReason::EscapesRoot => {
                write!(f, "attempted access outside of the working directory")
            }
            DenyReason::SymbolicLink => write!(f, "path is or traverses a symbolic link"),
        }
    }
}

/// Every failure the editor can surface. The tool layer shows these messages
/// verbatim to the calling model; each one echoes the offending path and
/// reads as a complete sentence.
///
/// Paths in messages are the caller-supplied relative paths, never the real
/// on-disk locations - real directories (user names included) stay hidden
/// from the model.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Access denied: {reason} (path: {path})")]
    AccessDenied { path: String, reason: DenyReason },

    #[error("Not found: no file or directory at {path}")]
    NotFound { path: String },

    #[error("Already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Invalid line range: {message}")]
    InvalidRange { message: String },

    #[error("Path {path} is a directory")]
    IsADirectory { path: String },

    #[error("Path {path} is not a directory")]
    NotADirectory { path: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    pub fn access_denied(path: impl Into<String>, reason: DenyReason) -> Self {
        Self::AccessDenied {
            path: path.into(),
            reason,
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
