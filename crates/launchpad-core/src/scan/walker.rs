//! Recursive directory traversal shared by statistics and backup

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// One filesystem object visited during a walk. Transient: produced and
/// consumed within a single operation, never persisted.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
}

/// Lazily walk `root` and every descendant, depth-first, visiting each
/// directory before its children. Siblings come back in sorted order so
/// derived listings behave deterministically. The first traversal error
/// ends the walk; callers see it as [`Error::Io`].
pub fn walk(root: &Path) -> impl Iterator<Item = Result<FileEntry>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let modified = metadata.modified().map_err(|e| {
                Error::io(
                    format!("failed to read mtime of {}", entry.path().display()),
                    e,
                )
            })?;
            Ok(FileEntry {
                is_dir: metadata.is_dir(),
                size: metadata.len(),
                modified,
                path: entry.into_path(),
            })
        })
}

/// Names of the immediate subdirectories of `path`, sorted. Feeds the
/// navigation and project-selection menus.
pub fn list_directories(path: &Path) -> Result<Vec<String>> {
    let context = || format!("failed to list {}", path.display());
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(path).map_err(|e| Error::io(context(), e))? {
        let entry = entry.map_err(|e| Error::io(context(), e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(context(), e))?;
        if file_type.is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Number of entries a walk of `root` yields, the root itself included.
/// Used to size progress bars before statistics and backup runs.
pub fn count_entries(root: &Path) -> Result<u64> {
    let mut count = 0;
    for entry in walk(root) {
        entry?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"hello").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("b.txt"), b"hello world").unwrap();
        tmp
    }

    #[test]
    fn test_walk_visits_root_then_descendants() {
        let tmp = sample_tree();
        let entries: Vec<FileEntry> = walk(tmp.path()).map(|e| e.unwrap()).collect();

        let paths: Vec<PathBuf> = entries.iter().map(|e| e.path.clone()).collect();
        let expected = vec![
            tmp.path().to_path_buf(),
            tmp.path().join("a.txt"),
            tmp.path().join("sub"),
            tmp.path().join("sub").join("b.txt"),
        ];
        assert_eq!(paths, expected);

        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].size, 5);
        assert_eq!(entries[3].size, 11);
    }

    #[test]
    fn test_walk_sorts_siblings() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }

        let names: Vec<String> = walk(tmp.path())
            .skip(1) // the root
            .map(|e| e.unwrap().path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_walk_propagates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let first = walk(&missing).next().expect("walk yields the failure");
        assert!(matches!(first, Err(Error::Io { .. })));
    }

    #[test]
    fn test_list_directories_skips_files_and_sorts() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("zeta")).unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::write(tmp.path().join("not-a-dir.txt"), b"x").unwrap();

        let dirs = list_directories(tmp.path()).unwrap();
        assert_eq!(dirs, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_directories_missing_path_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_directories(&tmp.path().join("nope"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_count_entries_includes_root() {
        let tmp = sample_tree();
        // root, a.txt, sub, sub/b.txt
        assert_eq!(count_entries(tmp.path()).unwrap(), 4);
    }
}
