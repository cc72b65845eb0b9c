mod add;
mod delete;
mod edit;
mod list;
mod search;

pub use add::{add_form, add_link};
pub use delete::delete_link;
pub use edit::{edit_form, edit_link};
pub use list::list_links;
pub use search::search_links;

use super::AppState;
use crate::link::Link;
use axum::response::Redirect;
use tracing::{error, info};

/// Upsert `link`, log the outcome and send the browser back to the listing.
async fn store_and_redirect(state: &AppState, link: Link, action: &'static str) -> Redirect {
    let url = link.url.clone();
    match state.store.upsert(link).await {
        Ok(previous) => info!(
            url = %url,
            replaced = previous.is_some(),
            "{action} link"
        ),
        Err(e) => error!(url = %url, "Failed to save links after {action}: {e}"),
    }
    Redirect::to(&state.service_url)
}
