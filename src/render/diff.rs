use std::path::Path;

use similar::TextDiff;

use crate::error::{MsgenError, Result};
use crate::render::emit::PlannedFile;

/// What writing a planned file would do to the file already at its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Create,
    Unchanged,
    /// Unified diff from the existing content to the planned content.
    Modify(String),
    /// Either side is not valid UTF-8.
    ModifyBinary,
}

pub fn compare_with_existing(file: &PlannedFile, output_dir: &Path) -> Result<FileChange> {
    let dest = output_dir.join(&file.relative_path);
    if !dest.is_file() {
        return Ok(FileChange::Create);
    }

    let existing = std::fs::read(&dest).map_err(|e| MsgenError::Io {
        context: format!("reading {}", dest.display()),
        source: e,
    })?;

    if existing == file.content {
        return Ok(FileChange::Unchanged);
    }

    match (
        std::str::from_utf8(&existing),
        std::str::from_utf8(&file.content),
    ) {
        (Ok(old), Ok(new)) => Ok(FileChange::Modify(unified_diff(
            old,
            new,
            &file.relative_path,
        ))),
        _ => Ok(FileChange::ModifyBinary),
    }
}

pub fn unified_diff(old: &str, new: &str, path: &Path) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut output = String::new();

    output.push_str(&format!(
        "--- a/{}\n+++ b/{}\n",
        path.display(),
        path.display()
    ));

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        output.push_str(&format!("{hunk}"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn planned(path: &str, content: &str) -> PlannedFile {
        PlannedFile {
            relative_path: PathBuf::from(path),
            content: content.as_bytes().to_vec(),
            is_copy: false,
        }
    }

    #[test]
    fn test_missing_file_is_create() {
        let dir = tempfile::tempdir().unwrap();
        let change = compare_with_existing(&planned("app/run.sh", "x"), dir.path()).unwrap();
        assert_eq!(change, FileChange::Create);
    }

    #[test]
    fn test_identical_file_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app")).unwrap();
        std::fs::write(dir.path().join("app/run.sh"), "docker run orders\n").unwrap();

        let change =
            compare_with_existing(&planned("app/run.sh", "docker run orders\n"), dir.path()).unwrap();
        assert_eq!(change, FileChange::Unchanged);
    }

    #[test]
    fn test_modified_file_has_diff() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("app")).unwrap();
        std::fs::write(dir.path().join("app/run.sh"), "docker run old\n").unwrap();

        let change =
            compare_with_existing(&planned("app/run.sh", "docker run new\n"), dir.path()).unwrap();
        let FileChange::Modify(diff) = &change else {
            panic!("expected a diff, got {change:?}");
        };
        assert!(diff.starts_with("--- a/app/run.sh\n+++ b/app/run.sh\n"));
        assert!(diff.contains("-docker run old"));
        assert!(diff.contains("+docker run new"));
    }
}
