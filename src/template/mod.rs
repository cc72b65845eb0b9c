mod defaults;
mod engine;
mod types;

pub use engine::{TemplateEngine, TemplateError};
pub use types::{AddContext, EditContext, LinkView, ListContext, Page, TagView};
