//! Common test utilities

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use linkstash::{AppState, CredentialStore, SharedLinkStore, Settings, TemplateEngine};
use std::path::Path;
use tempfile::TempDir;

pub const USER: &str = "alice";
pub const PASSWORD: &str = "wonderland";

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// State backed by `links.json` inside `dir`, with one known user.
pub async fn test_state(dir: &Path) -> AppState {
    let settings = Settings {
        links_file: dir.join("links.json"),
        ..Settings::default()
    };
    let store = SharedLinkStore::open(&settings.links_file).await;
    let credentials = CredentialStore::parse(&format!("{USER}:{PASSWORD}\n"));
    let templates = TemplateEngine::new().expect("built-in templates should compile");
    AppState::new(store, credentials, templates, &settings)
}

/// `Authorization` header value for the given credentials.
pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

/// `Authorization` header value for the known user.
#[allow(dead_code)] // Not every integration test authenticates
pub fn valid_auth() -> String {
    basic_auth(USER, PASSWORD)
}
