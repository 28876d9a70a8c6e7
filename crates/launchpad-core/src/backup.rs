//! Zip backup of a project directory

use crate::error::{Error, Result};
use crate::scan::walker::{self, FileEntry};
use chrono::Local;
use std::fs::File;
use std::io;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Timestamped archive name for `project`, second-granular so repeated
/// backups never collide.
pub fn backup_file_name(project: &str) -> String {
    format!(
        "{}_backup_{}.zip",
        project,
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Stream `src` into a new deflate-compressed zip archive at `dest`.
///
/// Entry names are relative to `src` and use forward slashes on every
/// platform; directories become explicit no-data entries with a trailing
/// slash. `on_entry` fires once per walked entry (the root included,
/// although the root itself is never written). Returns the number of
/// entries written.
///
/// `dest` must not live under `src`, or the walk would pick up the
/// half-written archive. On failure the partial archive is left behind
/// for the caller to inspect or remove.
pub fn archive_dir(
    src: &Path,
    dest: &Path,
    mut on_entry: impl FnMut(&FileEntry),
) -> Result<u64> {
    let file = File::create(dest)
        .map_err(|e| Error::io(format!("failed to create archive {}", dest.display()), e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0u64;
    for entry in walker::walk(src) {
        let entry = entry?;
        on_entry(&entry);

        let relative = entry
            .path
            .strip_prefix(src)
            .expect("walk entries always live under their root");
        if relative.as_os_str().is_empty() {
            continue; // the root itself
        }

        let name = entry_name(relative);
        if entry.is_dir {
            zip.add_directory(name.as_str(), options)
                .map_err(|e| entry_error(&name, e))?;
        } else {
            zip.start_file(name.as_str(), options)
                .map_err(|e| entry_error(&name, e))?;
            let mut source = File::open(&entry.path)
                .map_err(|e| Error::io(format!("failed to open {}", entry.path.display()), e))?;
            io::copy(&mut source, &mut zip)
                .map_err(|e| Error::io(format!("failed to compress {}", entry.path.display()), e))?;
        }
        written += 1;
    }

    zip.finish()
        .map_err(|e| Error::io("failed to finalize archive", io::Error::other(e)))?;
    Ok(written)
}

/// Join path components with `/` regardless of the platform separator.
fn entry_name(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

fn entry_error(name: &str, err: zip::result::ZipError) -> Error {
    Error::io(
        format!("failed to write archive entry {}", name),
        io::Error::other(err),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn sample_project(tmp: &TempDir) -> std::path::PathBuf {
        let src = tmp.path().join("proj");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.txt"), b"hello").unwrap();
        fs::create_dir(src.join("empty")).unwrap();
        fs::create_dir(src.join("sub")).unwrap();
        fs::write(src.join("sub").join("b.txt"), b"world!").unwrap();
        src
    }

    #[test]
    fn test_archive_round_trips_contents() {
        let tmp = TempDir::new().unwrap();
        let src = sample_project(&tmp);
        let dest = tmp.path().join("out.zip");

        let written = archive_dir(&src, &dest, |_| {}).unwrap();
        assert_eq!(written, 4); // a.txt, empty/, sub/, sub/b.txt

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        // by_index follows write order, which follows the sorted walk.
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "empty/", "sub/", "sub/b.txt"]);

        let mut content = String::new();
        archive
            .by_name("sub/b.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "world!");
        assert!(archive.by_name("empty/").unwrap().is_dir());
    }

    #[test]
    fn test_entry_names_are_relative() {
        let tmp = TempDir::new().unwrap();
        let src = sample_project(&tmp);
        let dest = tmp.path().join("out.zip");
        archive_dir(&src, &dest, |_| {}).unwrap();

        let archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        for name in archive.file_names() {
            assert!(!name.starts_with('/'), "absolute entry name: {name}");
            assert!(!name.contains("proj"), "entry leaked the source prefix: {name}");
            assert!(!name.contains('\\'), "backslash in entry name: {name}");
        }
    }

    #[test]
    fn test_progress_fires_once_per_walked_entry() {
        let tmp = TempDir::new().unwrap();
        let src = sample_project(&tmp);
        let dest = tmp.path().join("out.zip");

        let mut seen = 0u64;
        archive_dir(&src, &dest, |_| seen += 1).unwrap();
        assert_eq!(seen, walker::count_entries(&src).unwrap());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out.zip");
        let result = archive_dir(&tmp.path().join("nope"), &dest, |_| {});
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let src = sample_project(&tmp);
        let dest = tmp.path().join("no-such-dir").join("out.zip");
        assert!(matches!(
            archive_dir(&src, &dest, |_| {}),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_backup_file_name_shape() {
        let name = backup_file_name("demo");
        assert!(name.starts_with("demo_backup_"));
        assert!(name.ends_with(".zip"));
        // demo_backup_YYYYMMDD_HHMMSS.zip
        let stamp = &name["demo_backup_".len()..name.len() - ".zip".len()];
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit()));
    }
}
