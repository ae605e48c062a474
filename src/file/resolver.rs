use std::path::{Component, Path, PathBuf};

use crate::error::{DenyReason, EditorError};

/// The fixed directory boundary all file operations are confined to.
///
/// The root is canonicalized once at construction. Caller-supplied paths are
/// resolved against the live filesystem on every call - never cached - so a
/// tree that changes between calls (new symlinks included) cannot turn a
/// stale resolution into an escape.
#[derive(Debug, Clone)]
pub struct WorkingRoot {
    root: PathBuf,
}

impl WorkingRoot {
    /// Open a working root. The directory must already exist.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, EditorError> {
        let requested = root.as_ref();
        let root = requested
            .canonicalize()
            .map_err(|source| EditorError::io(requested.display().to_string(), source))?;

        if !root.is_dir() {
            return Err(EditorError::NotADirectory {
                path: requested.display().to_string(),
            });
        }

        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied relative path to a real path inside the
    /// root, or refuse with `AccessDenied`. `None`, the empty string, and
    /// `"."` all address the root itself.
    pub fn resolve(&self, raw: Option<&str>) -> Result<PathBuf, EditorError> {
        let raw = raw.unwrap_or("");
        if raw.is_empty() || raw == "." {
            return Ok(self.root.clone());
        }

        let requested = Path::new(raw);
        if requested.is_absolute() || requested.has_root() {
            return Err(EditorError::access_denied(raw, DenyReason::AbsolutePath));
        }

        // Settle `.` and `..` lexically before touching the filesystem. A
        // `..` that would pop above the root is an escape no matter what is
        // on disk.
        let mut segments = Vec::new();
        for component in requested.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if segments.pop().is_none() {
                        return Err(EditorError::access_denied(raw, DenyReason::EscapesRoot));
                    }
                }
                Component::Normal(segment) => segments.push(segment),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(EditorError::access_denied(raw, DenyReason::AbsolutePath));
                }
            }
        }

        // Walk down from the root, refusing any component that exists as a
        // symlink - before it would be followed, and even when it points
        // back inside the root.
        let mut resolved = self.root.clone();
        for segment in segments {
            resolved.push(segment);
            if let Ok(metadata) = std::fs::symlink_metadata(&resolved) {
                if metadata.file_type().is_symlink() {
                    return Err(EditorError::access_denied(raw, DenyReason::SymbolicLink));
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> (tempfile::TempDir, WorkingRoot) {
        let temp = tempfile::tempdir().unwrap();
        let project = temp.path().join("project");
        std::fs::create_dir(&project).unwrap();
        let root = WorkingRoot::open(&project).unwrap();
        (temp, root)
    }

    #[test]
    fn resolves_relative_paths() {
        let (_temp, root) = root();

        let resolved = root.resolve(Some("src/main.rs")).unwrap();
        assert_eq!(resolved, root.path().join("src/main.rs"));

        let resolved = root.resolve(Some("./src/./main.rs")).unwrap();
        assert_eq!(resolved, root.path().join("src/main.rs"));
    }

    #[test]
    fn empty_and_dot_address_the_root() {
        let (_temp, root) = root();

        assert_eq!(root.resolve(None).unwrap(), root.path());
        assert_eq!(root.resolve(Some("")).unwrap(), root.path());
        assert_eq!(root.resolve(Some(".")).unwrap(), root.path());
    }

    #[test]
    fn rejects_absolute_paths() {
        let (_temp, root) = root();

        // Even an absolute path that happens to point inside the root is
        // refused - the caller's intent cannot be trusted to have computed
        // it correctly.
        let inside = root.path().join("a.txt");
        let err = root.resolve(Some(inside.to_str().unwrap())).unwrap_err();
        assert!(matches!(
            err,
            EditorError::AccessDenied {
                reason: DenyReason::AbsolutePath,
                ..
            }
        ));

        let err = root.resolve(Some("/etc/passwd")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::AccessDenied {
                reason: DenyReason::AbsolutePath,
                ..
            }
        ));
    }

    #[test]
    fn rejects_parent_escapes() {
        let (_temp, root) = root();

        for path in ["..", "../outside.txt", "a/../../outside.txt", "../../.."] {
            let err = root.resolve(Some(path)).unwrap_err();
            assert!(
                matches!(
                    err,
                    EditorError::AccessDenied {
                        reason: DenyReason::EscapesRoot,
                        ..
                    }
                ),
                "expected escape denial for {path}, got {err}"
            );
        }
    }

    #[test]
    fn allows_parent_components_that_stay_inside() {
        let (_temp, root) = root();

        let resolved = root.resolve(Some("sub/../a.txt")).unwrap();
        assert_eq!(resolved, root.path().join("a.txt"));
    }

    #[test]
    fn resolves_paths_that_do_not_exist_yet() {
        let (_temp, root) = root();

        let resolved = root.resolve(Some("new/deep/file.txt")).unwrap();
        assert!(resolved.starts_with(root.path()));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_symlinks_even_inside_the_root() {
        let (_temp, root) = root();

        std::fs::write(root.path().join("target.txt"), "data").unwrap();
        std::os::unix::fs::symlink(root.path().join("target.txt"), root.path().join("link.txt"))
            .unwrap();

        let err = root.resolve(Some("link.txt")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::AccessDenied {
                reason: DenyReason::SymbolicLink,
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_paths_that_traverse_a_symlinked_directory() {
        let (temp, root) = root();

        // A directory symlink pointing outside the root must be refused
        // before the traversal follows it.
        let outside = temp.path().join("outside");
        std::fs::create_dir(&outside).unwrap();
        std::fs::write(outside.join("secret.txt"), "secret").unwrap();
        std::os::unix::fs::symlink(&outside, root.path().join("escape")).unwrap();

        let err = root.resolve(Some("escape/secret.txt")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::AccessDenied {
                reason: DenyReason::SymbolicLink,
                ..
            }
        ));
    }
}
