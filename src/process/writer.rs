//! Whole-file replacement of the target document
//!
//! The atomic path writes into a temporary file next to the target and
//! renames it over the target, so the target is either the old or the new
//! content, never a partial write.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::Result;

/// Replace the contents of `path` with `contents`
pub fn write_document(path: &Path, contents: &str, atomic: bool) -> Result<()> {
    if atomic {
        write_atomic(path, contents)
    } else {
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = contents.len(), "overwrote file");
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    // Rename over the link target, not the link itself
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = resolved.as_path();

    // Temp file must live on the same filesystem for the rename to be atomic
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("failed to create temp file in {}", parent_dir.display()))?;
    debug!(temp = %temp_file.path().display(), "writing temp file");

    temp_file
        .write_all(contents.as_bytes())
        .with_context(|| format!("failed to write temp file for {}", path.display()))?;
    temp_file
        .as_file()
        .sync_all()
        .with_context(|| format!("failed to sync temp file for {}", path.display()))?;

    // NamedTempFile is created 0600; keep the target's mode
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }

    temp_file
        .persist(path)
        .with_context(|| format!("failed to persist temp file to {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "replaced file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.js");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        write_document(&path, "new", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // Only the target remains; the temp file was renamed over it
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_direct_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.js");
        fs::write(&path, "old").unwrap();

        write_document(&path, "new contents", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
    }

    #[test]
    fn test_atomic_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("page.js");
        let err = write_document(&path, "x", true).unwrap_err();
        assert!(err.to_string().contains("failed to create temp file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real_dir = dir.path().join("real");
        let app_dir = dir.path().join("app");
        fs::create_dir(&real_dir).unwrap();
        fs::create_dir(&app_dir).unwrap();
        let real = real_dir.join("page.js");
        let link = app_dir.join("page.js");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink("../real/page.js", &link).unwrap();

        write_document(&link, "new", true).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
        assert_eq!(fs::read_dir(&app_dir).unwrap().count(), 1);
        assert_eq!(fs::read_dir(&real_dir).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.js");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_document(&path, "new", true).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
