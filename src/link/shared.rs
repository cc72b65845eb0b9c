use super::{Link, LinkStore, StoreError};
use crate::search::{search, SearchQuery};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A [`LinkStore`] shared between request handlers.
///
/// Every operation holds one lock for its whole duration, so a mutation's
/// load, change and save can never interleave with another request.
#[derive(Clone, Debug)]
pub struct SharedLinkStore {
    inner: Arc<Mutex<LinkStore>>,
}

impl SharedLinkStore {
    #[must_use]
    pub fn new(store: LinkStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Create a store for `path` and load whatever the file holds.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = LinkStore::new(path);
        store.load().await;
        Self::new(store)
    }

    /// Re-read the backing file, returning the number of links now held.
    pub async fn reload(&self) -> usize {
        self.inner.lock().await.load().await
    }

    /// Load, insert or replace `link`, then save.
    ///
    /// The in-memory change stands even when saving fails; the error is
    /// returned so the caller can report it.
    pub async fn upsert(&self, link: Link) -> Result<Option<Link>, StoreError> {
        let mut store = self.inner.lock().await;
        store.load().await;
        let previous = store.add(link);
        store.save().await?;
        Ok(previous)
    }

    /// Load, remove `url`, then save. Removing an absent URL still rewrites the file.
    pub async fn remove(&self, url: &str) -> Result<Option<Link>, StoreError> {
        let mut store = self.inner.lock().await;
        store.load().await;
        let removed = store.delete(url);
        store.save().await?;
        Ok(removed)
    }

    pub async fn get(&self, url: &str) -> Option<Link> {
        self.inner.lock().await.get(url).cloned()
    }

    /// Every link, newest first.
    pub async fn snapshot(&self) -> Vec<Link> {
        self.inner.lock().await.all()
    }

    pub async fn search(&self, query: &SearchQuery) -> Vec<Link> {
        let links = self.snapshot().await;
        search(&links, query)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
