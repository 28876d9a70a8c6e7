//! Directory traversal and project statistics

pub mod stats;
pub mod walker;

pub use stats::{collect, collect_with_progress, ProjectStats};
pub use walker::{count_entries, list_directories, walk, FileEntry};
