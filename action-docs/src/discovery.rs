//! Locating and reading definition files.
//!
//! Directory entries are visited in sorted order and every result list is
//! sorted, so two runs over the same tree see the same files in the same
//! order whatever the file system returns.

use std::io::{ErrorKind, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, FileType};

use crate::error::ActionDocsError;

/// File names recognised as action definitions.
pub const ACTION_FILE_NAMES: [&str; 2] = ["action.yml", "action.yaml"];

/// Extensions recognised as workflow definitions.
pub const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Recursively finds `action.yml` and `action.yaml` files under `root`.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when `root` or any directory beneath it
/// cannot be listed.
pub fn find_actions(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, ActionDocsError> {
    let dir = open_dir(root)?;
    let mut found = Vec::new();
    collect_actions(&dir, root, &mut found)?;
    found.sort();
    Ok(found)
}

/// Finds `*.yml` and `*.yaml` files directly inside `dir`. Subdirectories
/// are not searched.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when `dir` cannot be listed.
pub fn find_workflows(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, ActionDocsError> {
    let handle = open_dir(dir)?;
    let mut found: Vec<Utf8PathBuf> = list_entries(&handle, dir)?
        .into_iter()
        .filter(|(name, file_type)| file_type.is_file() && is_workflow_file(name))
        .map(|(name, _)| child(dir, &name))
        .collect();
    found.sort();
    tracing::debug!(dir = %dir, count = found.len(), "discovered workflow files");
    Ok(found)
}

/// Reads a definition file into memory.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when the file cannot be opened or read.
pub fn read_source(path: &Utf8Path) -> Result<Vec<u8>, ActionDocsError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| ActionDocsError::io(path, ErrorKind::InvalidInput.into()))?;
    let dir = open_dir(parent)?;
    let mut file = dir
        .open(file_name)
        .map_err(|err| ActionDocsError::io(path, err))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|err| ActionDocsError::io(path, err))?;
    Ok(buffer)
}

fn collect_actions(
    dir: &Dir,
    base: &Utf8Path,
    found: &mut Vec<Utf8PathBuf>,
) -> Result<(), ActionDocsError> {
    for (name, file_type) in list_entries(dir, base)? {
        let rel = child(base, &name);
        if file_type.is_dir() {
            let subdir = dir
                .open_dir(&name)
                .map_err(|err| ActionDocsError::io(&rel, err))?;
            collect_actions(&subdir, &rel, found)?;
        } else if file_type.is_file() && ACTION_FILE_NAMES.contains(&name.as_str()) {
            tracing::debug!(path = %rel, "discovered action");
            found.push(rel);
        }
    }
    Ok(())
}

fn list_entries(dir: &Dir, base: &Utf8Path) -> Result<Vec<(String, FileType)>, ActionDocsError> {
    let mut entries = Vec::new();
    for entry_result in dir
        .read_dir(".")
        .map_err(|err| ActionDocsError::io(base, err))?
    {
        let entry = entry_result.map_err(|err| ActionDocsError::io(base, err))?;
        let name = match entry.file_name() {
            Ok(name) => name,
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                tracing::debug!(dir = %base, "skipping entry with a non-UTF-8 name");
                continue;
            }
            Err(err) => return Err(ActionDocsError::io(base, err)),
        };
        let file_type = entry
            .file_type()
            .map_err(|err| ActionDocsError::io(base, err))?;
        entries.push((name, file_type));
    }
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));
    Ok(entries)
}

fn open_dir(path: &Utf8Path) -> Result<Dir, ActionDocsError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| ActionDocsError::io(path, err))
}

fn is_workflow_file(name: &str) -> bool {
    Utf8Path::new(name)
        .extension()
        .is_some_and(|ext| WORKFLOW_EXTENSIONS.contains(&ext))
}

// A `.` base is dropped: `actions/a/action.yml`, not `./actions/a/action.yml`.
fn child(base: &Utf8Path, name: &str) -> Utf8PathBuf {
    if base.as_str() == "." {
        Utf8PathBuf::from(name)
    } else {
        base.join(name)
    }
}

#[cfg(test)]
mod tests {
    //! Tests for definition file discovery.

    use super::*;
    use cap_std::fs_utf8::OpenOptions;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::TempDir;

    struct Tree {
        _tempdir: TempDir,
        root: Utf8PathBuf,
        dir: Dir,
    }

    #[fixture]
    fn tree() -> Tree {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        Tree {
            _tempdir: tempdir,
            root,
            dir,
        }
    }

    fn write_file(dir: &Dir, path: &str, contents: &str) {
        let parent = Utf8Path::new(path)
            .parent()
            .filter(|parent| !parent.as_str().is_empty());
        if let Some(parent) = parent {
            dir.create_dir_all(parent).expect("create parent directory");
        }
        let mut file = dir
            .open_with(
                path,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .expect("open file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    fn relative(paths: &[Utf8PathBuf], root: &Utf8Path) -> Vec<String> {
        paths
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .expect("path below root")
                    .as_str()
                    .to_owned()
            })
            .collect()
    }

    #[rstest]
    fn finds_actions_recursively_in_sorted_order(tree: Tree) {
        write_file(&tree.dir, "b/action.yml", "name: b");
        write_file(&tree.dir, "a/nested/action.yaml", "name: nested");
        write_file(&tree.dir, "a/action.yml", "name: a");
        write_file(&tree.dir, "a/README.md", "# a");
        write_file(&tree.dir, "c/not-action.yml", "name: c");

        let found = find_actions(&tree.root).expect("scan actions");

        assert_eq!(
            relative(&found, &tree.root),
            ["a/action.yml", "a/nested/action.yaml", "b/action.yml"]
        );
    }

    #[rstest]
    fn finds_workflows_without_descending(tree: Tree) {
        write_file(&tree.dir, "wf/release.yaml", "name: release");
        write_file(&tree.dir, "wf/ci.yml", "name: ci");
        write_file(&tree.dir, "wf/README.md", "# Workflows");
        write_file(&tree.dir, "wf/nested/deep.yml", "name: deep");

        let found = find_workflows(&tree.root.join("wf")).expect("scan workflows");

        assert_eq!(
            relative(&found, &tree.root),
            ["wf/ci.yml", "wf/release.yaml"]
        );
    }

    #[rstest]
    fn missing_directory_is_an_io_error(tree: Tree) {
        let missing = tree.root.join("absent");
        let err = find_workflows(&missing).expect_err("missing directory");
        assert!(matches!(err, ActionDocsError::Io { ref path, .. } if *path == missing));
    }

    #[rstest]
    fn reads_source_bytes(tree: Tree) {
        write_file(&tree.dir, "a/action.yml", "name: a\n");
        let bytes = read_source(&tree.root.join("a/action.yml")).expect("read source");
        assert_eq!(bytes, b"name: a\n");
    }

    #[rstest]
    fn reading_missing_file_reports_its_path(tree: Tree) {
        let path = tree.root.join("gone.yml");
        let err = read_source(&path).expect_err("missing file");
        assert!(matches!(err, ActionDocsError::Io { path: ref reported, .. } if *reported == path));
    }

    #[rstest]
    #[case::dot(".", "a.yml", "a.yml")]
    #[case::nested(".github/workflows", "a.yml", ".github/workflows/a.yml")]
    fn joins_without_leading_dot(#[case] base: &str, #[case] name: &str, #[case] expected: &str) {
        assert_eq!(child(Utf8Path::new(base), name).as_str(), expected);
    }

    #[rstest]
    #[case::yml("ci.yml", true)]
    #[case::yaml("ci.yaml", true)]
    #[case::markdown("README.md", false)]
    #[case::no_extension("yml", false)]
    fn recognises_workflow_extensions(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_workflow_file(name), expected);
    }
}
