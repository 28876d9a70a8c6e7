//! Project statistics gathered in a single traversal

use crate::error::Result;
use crate::scan::walker::{self, FileEntry};
use std::path::Path;
use std::time::SystemTime;

/// Aggregate statistics for one project directory.
///
/// `file_count` and `total_size` cover regular files only; directories
/// contribute nothing to either. `last_modified` is the maximum mtime
/// across every visited entry, directories included.
#[derive(Debug, Clone, Copy)]
pub struct ProjectStats {
    pub last_modified: SystemTime,
    pub total_size: u64,
    pub file_count: u64,
}

/// Collect statistics for `root`.
pub fn collect(root: &Path) -> Result<ProjectStats> {
    collect_with_progress(root, |_| {})
}

/// Collect statistics for `root`, invoking `on_entry` once per visited
/// entry (the root included) so callers can drive a progress bar.
pub fn collect_with_progress(
    root: &Path,
    mut on_entry: impl FnMut(&FileEntry),
) -> Result<ProjectStats> {
    let mut stats = ProjectStats {
        last_modified: SystemTime::UNIX_EPOCH,
        total_size: 0,
        file_count: 0,
    };
    for entry in walker::walk(root) {
        let entry = entry?;
        if !entry.is_dir {
            stats.file_count += 1;
            stats.total_size += entry.size;
        }
        if entry.modified > stats.last_modified {
            stats.last_modified = entry.modified;
        }
        on_entry(&entry);
    }
    Ok(stats)
}
