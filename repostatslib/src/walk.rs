//! Directory traversal.
//!
//! Produces the `(directory, file name)` sequence the profiler consumes.
//! Traversal is deliberately dumb: every regular file in the tree is yielded
//! exactly once, hidden files included; filtering happens downstream through
//! classification, not here.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::RepoStatsError;
use crate::Result;

/// Enumerate every regular file under `root` as a `(parent dir, file name)`
/// pair.
///
/// Fails when `root` does not exist or is not a directory. Unreadable
/// subtrees are skipped; symlinked directories are not followed. The result
/// is sorted for deterministic output.
pub fn walk_files(root: impl AsRef<Path>) -> Result<Vec<(PathBuf, String)>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(RepoStatsError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RepoStatsError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let file = entry.file_name().to_string_lossy().into_owned();
        let dir = entry
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        files.push((dir, file));
    }

    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_yields_every_file_once() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/nested")).unwrap();
        fs::write(temp.path().join("top.py"), "").unwrap();
        fs::write(temp.path().join("src/a.rs"), "").unwrap();
        fs::write(temp.path().join("src/nested/b.rs"), "").unwrap();

        let files = walk_files(temp.path()).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|(_, f)| f == "top.py"));
        assert!(files.iter().any(|(d, f)| f == "b.rs" && d.ends_with("nested")));
    }

    #[test]
    fn test_walk_includes_hidden_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".gitignore"), "target\n").unwrap();

        let files = walk_files(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].1, ".gitignore");
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp = tempdir().unwrap();
        assert!(walk_files(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_walk_nonexistent_root() {
        let err = walk_files("/nonexistent/path").unwrap_err();
        assert!(matches!(err, RepoStatsError::PathNotFound(_)));
    }

    #[test]
    fn test_walk_root_must_be_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let err = walk_files(&file).unwrap_err();
        assert!(matches!(err, RepoStatsError::NotADirectory(_)));
    }

    #[test]
    fn test_walk_is_deterministic() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.py"), "").unwrap();
        fs::write(temp.path().join("a.py"), "").unwrap();

        assert_eq!(walk_files(temp.path()).unwrap(), walk_files(temp.path()).unwrap());
    }
}
