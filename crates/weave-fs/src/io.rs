//! Atomic I/O operations with file locking

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// The content goes to a scoped temporary file in the target's directory
/// which is then renamed over the target. The temporary file is removed on
/// every exit path that does not reach the rename, so readers observe either
/// the old content or the new content, never a partial file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    let mut temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| Error::io(parent, e))?;

    FileExt::lock_exclusive(temp.as_file()).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    FileExt::unlock(temp.as_file()).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file that may not exist yet.
///
/// Returns `Ok(None)` for a missing file; every other failure is an error.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
