//! Link records and the store that owns them.
//!
//! The store keeps every link in memory keyed by URL and mirrors the whole
//! collection to a single JSON array on disk.

mod error;
mod shared;
mod storage;
mod store;
mod types;

pub use error::StoreError;
pub use shared::SharedLinkStore;
pub use storage::{read_links_file, write_links_file};
pub use store::LinkStore;
pub use types::{parse_tags, Link};
