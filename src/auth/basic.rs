use super::CredentialStore;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use http::header::WWW_AUTHENTICATE;
use http::{HeaderValue, StatusCode};
use thiserror::Error;

/// Challenge sent with every 401 so browsers prompt for credentials.
pub const WWW_AUTHENTICATE_CHALLENGE: &str = r#"Basic realm="linkstash""#;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Malformed Authorization header")]
    MalformedHeader,

    #[error("Failed to decode Basic credentials: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Wrong password for user: {0}")]
    WrongPassword(String),
}

impl AuthError {
    /// The user name the request claimed, if it got that far.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::UnknownUser(user) | Self::WrongPassword(user) => Some(user),
            Self::MissingHeader | Self::MalformedHeader | Self::Decode(_) => None,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, WWW_AUTHENTICATE_CHALLENGE)],
            "Unauthorized",
        )
            .into_response()
    }
}

/// Decode `Basic <base64(user:password)>` into its two halves.
fn decode_basic(header: &HeaderValue) -> Result<(String, String), AuthError> {
    let value = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let (scheme, payload) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedHeader);
    }
    let decoded = STANDARD.decode(payload.trim())?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;
    let (user, password) = decoded.split_once(':').ok_or(AuthError::MalformedHeader)?;
    Ok((user.to_string(), password.to_string()))
}

impl CredentialStore {
    /// Check an `Authorization` header against the stored credentials.
    ///
    /// Returns the authenticated user name.
    pub fn authenticate(&self, header: Option<&HeaderValue>) -> Result<String, AuthError> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let (user, password) = decode_basic(header)?;
        if self.verify(&user, &password) {
            return Ok(user);
        }
        if self.contains_user(&user) {
            Err(AuthError::WrongPassword(user))
        } else {
            Err(AuthError::UnknownUser(user))
        }
    }
}

#[cfg(test)]
#[path = "basic_tests.rs"]
mod tests;
