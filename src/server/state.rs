use crate::auth::CredentialStore;
use crate::config::Settings;
use crate::link::SharedLinkStore;
use crate::template::TemplateEngine;
use std::sync::Arc;

/// Everything a handler needs, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedLinkStore,
    pub credentials: Arc<CredentialStore>,
    pub templates: Arc<TemplateEngine>,
    pub title: String,
    /// Redirect target after a successful add, edit or delete.
    pub service_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: SharedLinkStore,
        credentials: CredentialStore,
        templates: TemplateEngine,
        settings: &Settings,
    ) -> Self {
        Self {
            store,
            credentials: Arc::new(credentials),
            templates: Arc::new(templates),
            title: settings.title.clone(),
            service_url: settings.service_url.clone(),
        }
    }
}
