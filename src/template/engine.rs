use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::info;

use super::defaults;
use super::types::{AddContext, EditContext, ListContext, Page};

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders the service's HTML pages.
///
/// `{{value}}` is HTML-escaped; the built-in pages only use `{{{raw}}}` for
/// hrefs that were already percent-encoded.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Engine with the built-in pages.
    pub fn new() -> Result<Self, TemplateError> {
        let mut engine = Self {
            handlebars: Handlebars::new(),
        };
        engine.register(Page::List, defaults::LIST)?;
        engine.register(Page::Add, defaults::ADD)?;
        engine.register(Page::Edit, defaults::EDIT)?;
        Ok(engine)
    }

    /// Engine with the built-in pages, replaced by any `<page>.hbs` found in
    /// `overrides`.
    pub async fn load(overrides: Option<&Path>) -> Result<Self, TemplateError> {
        let mut engine = Self::new()?;
        let Some(dir) = overrides else {
            return Ok(engine);
        };
        for page in Page::ALL {
            let path = dir.join(page.file_name());
            if !path.exists() {
                continue;
            }
            let source = fs::read_to_string(&path).await?;
            engine.register(page, &source)?;
            info!(template = page.name(), path = %path.display(), "Using template override");
        }
        Ok(engine)
    }

    /// Compile `source` as the template for `page`, replacing any previous one.
    pub fn register(&mut self, page: Page, source: &str) -> Result<(), TemplateError> {
        self.handlebars.register_template_string(page.name(), source)?;
        Ok(())
    }

    pub fn render_list(&self, context: &ListContext) -> Result<String, TemplateError> {
        self.render(Page::List, context)
    }

    pub fn render_add(&self, context: &AddContext) -> Result<String, TemplateError> {
        self.render(Page::Add, context)
    }

    pub fn render_edit(&self, context: &EditContext) -> Result<String, TemplateError> {
        self.render(Page::Edit, context)
    }

    fn render<T: Serialize>(&self, page: Page, context: &T) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(page.name(), context)?)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
