use crate::link::{Link, StoreError};
use crate::utils::atomic_write;
use std::path::Path;
use tokio::fs;
use tracing::warn;

/// Read every link from a JSON array file.
///
/// A missing or blank file is an empty collection. Array entries that do not
/// parse as a link are skipped with a warning; the rest are kept.
pub async fn read_links_file(path: &Path) -> Result<Vec<Link>, StoreError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(StoreError::NotAnArray(path.to_path_buf()));
    };
    let mut links = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Link>(entry) {
            Ok(link) => links.push(link),
            Err(e) => warn!(path = %path.display(), index, "Skipping unreadable link entry: {e}"),
        }
    }
    Ok(links)
}

/// Replace the links file with `links` as a pretty-printed JSON array.
pub async fn write_links_file(path: &Path, links: &[Link]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(links)?;
    atomic_write(path, &content).await?;
    Ok(())
}
