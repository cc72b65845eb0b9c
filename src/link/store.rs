use super::storage::{read_links_file, write_links_file};
use super::{Link, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// In-memory links keyed by URL, backed by a JSON file.
#[derive(Debug)]
pub struct LinkStore {
    links: HashMap<String, Link>,
    path: PathBuf,
}

impl LinkStore {
    /// Create an empty store backed by `path`. Nothing is read until [`LinkStore::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            links: HashMap::new(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory set with the contents of the backing file.
    ///
    /// Read and parse failures are logged and leave the store empty; they
    /// never abort the caller. Returns the number of links loaded.
    pub async fn load(&mut self) -> usize {
        let links = match read_links_file(&self.path).await {
            Ok(links) => links,
            Err(e) => {
                error!(path = %self.path.display(), "Failed to load links: {e}");
                Vec::new()
            }
        };
        self.links = links
            .into_iter()
            .map(|link| (link.url.clone(), link))
            .collect();
        debug!(path = %self.path.display(), count = self.links.len(), "Loaded links");
        self.links.len()
    }

    /// Overwrite the backing file with every link in memory.
    pub async fn save(&self) -> Result<(), StoreError> {
        write_links_file(&self.path, &self.all()).await
    }

    /// Insert or replace the link stored under `link.url`.
    pub fn add(&mut self, link: Link) -> Option<Link> {
        self.links.insert(link.url.clone(), link)
    }

    /// Remove the link for `url`. Absent URLs are a no-op.
    pub fn delete(&mut self, url: &str) -> Option<Link> {
        self.links.remove(url)
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Link> {
        self.links.get(url)
    }

    /// Every link, newest first, URL breaking ties.
    #[must_use]
    pub fn all(&self) -> Vec<Link> {
        let mut links: Vec<Link> = self.links.values().cloned().collect();
        links.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.url.cmp(&b.url)));
        links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
