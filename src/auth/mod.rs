//! HTTP Basic authentication for the routes that change links.

mod basic;
mod credentials;
mod middleware;

pub use basic::{AuthError, WWW_AUTHENTICATE_CHALLENGE};
pub use credentials::{credential_line, hash_password, CredentialError, CredentialStore};
pub use middleware::require_basic_auth;
