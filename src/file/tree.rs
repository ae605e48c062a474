use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Render a directory as a nested tagged tree.
///
/// The rendered root is always named `.`. Directory names found in
/// `ignore_dirs` collapse to a single `hidden` leaf and are never expanded,
/// which keeps output bounded and keeps tooling internals out of the
/// caller's context. Entries are ordered files first, then directories,
/// each lexicographically, so successive renderings of the same tree are
/// stable and diffable. Symlinked entries are omitted.
pub fn render(root: &Path, ignore_dirs: &HashSet<String>) -> io::Result<String> {
    render_dir(root, ".", ignore_dirs, 0)
}

fn render_dir(
    path: &Path,
    name: &str,
    ignore_dirs: &HashSet<String>,
    depth: usize,
) -> io::Result<String> {
    let prefix = "  ".repeat(depth);

    // (is_dir, name) sorts files before directories, then by name.
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            continue;
        }
        entries.push((
            file_type.is_dir(),
            entry.file_name().to_string_lossy().into_owned(),
        ));
    }
    entries.sort();

    let mut children = Vec::new();
    for (is_dir, child_name) in entries {
        let child_prefix = "  ".repeat(depth + 1);
        if !is_dir {
            children.push(format!("{child_prefix}<file name='{child_name}'/>"));
        } else if ignore_dirs.contains(&child_name) {
            children.push(format!("{child_prefix}<dir name='{child_name}' hidden/>"));
        } else {
            children.push(render_dir(
                &path.join(&child_name),
                &child_name,
                ignore_dirs,
                depth + 1,
            )?);
        }
    }

    if children.is_empty() {
        return Ok(format!("{prefix}<dir name='{name}' empty/>"));
    }

    Ok(format!(
        "{prefix}<dir name='{name}'>\n{}\n{prefix}</dir>",
        children.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn renders_files_before_directories() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("adir")).unwrap();
        std::fs::write(temp.path().join("zfile.txt"), "").unwrap();
        std::fs::write(temp.path().join("afile.txt"), "").unwrap();
        std::fs::write(temp.path().join("adir/inner.txt"), "").unwrap();

        let rendered = render(temp.path(), &ignore(&[])).unwrap();
        let expected = "\
<dir name='.'>
  <file name='afile.txt'/>
  <file name='zfile.txt'/>
  <dir name='adir'>
    <file name='inner.txt'/>
  </dir>
</dir>";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_directories_render_as_leaves() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("hollow")).unwrap();

        let rendered = render(temp.path(), &ignore(&[])).unwrap();
        assert!(rendered.contains("<dir name='hollow' empty/>"));

        let empty_root = tempfile::tempdir().unwrap();
        let rendered = render(empty_root.path(), &ignore(&[])).unwrap();
        assert_eq!(rendered, "<dir name='.' empty/>");
    }

    #[test]
    fn ignored_directories_are_hidden_leaves_regardless_of_contents() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join(".git/objects")).unwrap();
        std::fs::write(temp.path().join(".git/HEAD"), "ref").unwrap();
        std::fs::write(temp.path().join("main.py"), "").unwrap();

        let rendered = render(temp.path(), &ignore(&[".git"])).unwrap();
        assert!(rendered.contains("<dir name='.git' hidden/>"));
        assert!(!rendered.contains("HEAD"));
        assert!(!rendered.contains("objects"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_entries_are_omitted() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("real.txt"), "").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.txt"), temp.path().join("alias.txt"))
            .unwrap();

        let rendered = render(temp.path(), &ignore(&[])).unwrap();
        assert!(rendered.contains("real.txt"));
        assert!(!rendered.contains("alias.txt"));
    }
}
