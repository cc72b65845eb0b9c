// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod auth;
pub mod config;
pub mod link;
pub mod logging;
pub mod search;
pub mod server;
pub mod template;
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthError, CredentialError, CredentialStore};
pub use config::{ConfigError, FileConfig, ServerSection, Settings};
pub use link::{parse_tags, Link, LinkStore, SharedLinkStore, StoreError};
pub use search::{search, SearchQuery};
pub use server::{router, serve, AppState};
pub use template::{TemplateEngine, TemplateError};
