//! Artifact writes: full overwrite through a `.part` temp file and an atomic
//! rename, so a crash never leaves a half-written list behind.

use crate::error::SyncError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `all_proxies.md` → `all_proxies.md.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Replace `path` with `contents` (UTF-8). Parent directories are created as needed.
///
/// The temp file is removed if any step fails.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), SyncError> {
    let tmp = temp_path(path);
    let result = write_then_rename(&tmp, path, contents);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = contents.len(), "wrote {}", path.display());
    Ok(())
}

fn write_then_rename(tmp: &Path, final_path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = final_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("all_proxies.txt"));
        assert_eq!(p.to_string_lossy(), "all_proxies.txt.part");
        let p2 = temp_path(Path::new("/tmp/out/all_proxies.md"));
        assert_eq!(p2.to_string_lossy(), "/tmp/out/all_proxies.md.part");
    }

    #[test]
    fn write_creates_file_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_proxies.txt");
        write_artifact(&path, "tg://proxy?server=a\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "tg://proxy?server=a\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn write_overwrites_not_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_proxies.md");
        write_artifact(&path, "first run, longer contents\n").unwrap();
        write_artifact(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/all_proxies.txt");
        write_artifact(&path, "\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_into_directory_path_fails_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        let err = write_artifact(&path, "x\n").unwrap_err();
        assert!(matches!(err, SyncError::Write { .. }));
        assert!(!temp_path(&path).exists());
        assert!(path.is_dir());
    }
}
