//! Atomic file replacement.
//!
//! Content is written to a temp file next to the target and renamed over
//! it, so readers see either the old file or the new one, never a torn write.

use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory that will hold the temp file; a bare file name means the cwd.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Replace `path` with `content` atomically.
///
/// The temp file is removed automatically if any step fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = parent_dir(path);
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        // Same directory as the target so the rename never crosses filesystems
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&target_path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
