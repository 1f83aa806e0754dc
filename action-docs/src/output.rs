//! Writers for generated README files.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::ActionDocsError;

/// Writes `content` to `out_dir/file_name`, replacing any existing file.
///
/// The directory is created when missing. Returns the written path.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when the directory cannot be created or
/// the file cannot be written.
pub fn write_document(
    out_dir: &Utf8Path,
    file_name: &str,
    content: &str,
) -> Result<Utf8PathBuf, ActionDocsError> {
    let dir = ensure_dir(out_dir)?;
    let path = out_dir.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| ActionDocsError::io(&path, io_err))?;
    file.write_all(content.as_bytes())
        .map_err(|io_err| ActionDocsError::io(&path, io_err))?;
    tracing::debug!(path = %path, bytes = content.len(), "wrote document");
    Ok(path)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, ActionDocsError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| ActionDocsError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| ActionDocsError::io(path, io_err))
        }
        Err(open_err) => Err(ActionDocsError::io(path, open_err)),
    }
}

#[cfg(test)]
mod tests {
    //! Tests for README output.

    use super::*;
    use rstest::rstest;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        (tempdir, root)
    }

    #[rstest]
    fn creates_missing_directories() {
        let (_tempdir, root) = temp_root();
        let out_dir = root.join("docs/workflows");

        let written = write_document(&out_dir, "README.md", "# Workflows\n").expect("write");

        assert_eq!(written, out_dir.join("README.md"));
        let content = std::fs::read_to_string(&written).expect("read back");
        assert_eq!(content, "# Workflows\n");
    }

    #[rstest]
    fn replaces_existing_content() {
        let (_tempdir, root) = temp_root();
        write_document(&root, "README.md", "a much longer first version\n").expect("first write");
        let written = write_document(&root, "README.md", "short\n").expect("second write");
        let content = std::fs::read_to_string(&written).expect("read back");
        assert_eq!(content, "short\n");
    }

    #[rstest]
    fn reports_path_when_directory_is_a_file() {
        let (_tempdir, root) = temp_root();
        std::fs::write(root.join("blocker"), "").expect("create blocking file");

        let err = write_document(&root.join("blocker"), "README.md", "x").expect_err("blocked");

        assert!(matches!(err, ActionDocsError::Io { .. }));
    }
}
