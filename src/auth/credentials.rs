use crate::utils::{compute_hash, constant_time_eq};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Prefix marking a salted SHA-256 secret: `$sha256$<salt>$<hex digest>`.
const HASH_PREFIX: &str = "$sha256$";

/// Compared against when the user is unknown, so a miss costs as much as a
/// wrong password. No password hashes to an all-zero digest.
const DUMMY_SECRET: &str =
    "$sha256$00000000000000000000000000000000$0000000000000000000000000000000000000000000000000000000000000000";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to read credentials file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Usernames mapped to their stored secret, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    /// Parse `username:password` lines.
    ///
    /// Each line is split on its first colon, so passwords may contain
    /// colons. Blank lines and `#` comments are ignored; a later line for
    /// the same user replaces an earlier one.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut users = HashMap::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(':') {
                Some((user, secret)) => {
                    users.insert(user.to_string(), secret.to_string());
                }
                None => warn!(line = number.saturating_add(1), "Ignoring credentials line without ':'"),
            }
        }
        Self { users }
    }

    /// Read and parse the credentials file.
    pub async fn load(path: &Path) -> Result<Self, CredentialError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| CredentialError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::parse(&content);
        debug!(path = %path.display(), users = store.len(), "Loaded credentials");
        Ok(store)
    }

    /// True if `username` exists and `password` matches its stored secret.
    ///
    /// Unknown users still go through a full hash comparison.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(stored) => verify_secret(stored, password),
            None => {
                std::hint::black_box(verify_secret(DUMMY_SECRET, password));
                false
            }
        }
    }

    #[must_use]
    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn verify_secret(stored: &str, password: &str) -> bool {
    if let Some((salt, digest)) = stored
        .strip_prefix(HASH_PREFIX)
        .and_then(|rest| rest.split_once('$'))
    {
        let computed = compute_hash(&format!("{salt}{password}"));
        return constant_time_eq(computed.as_bytes(), digest.to_ascii_lowercase().as_bytes());
    }
    constant_time_eq(stored.as_bytes(), password.as_bytes())
}

/// Hash `password` with `salt` into the stored `$sha256$<salt>$<hex>` form.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    format!("{HASH_PREFIX}{salt}${}", compute_hash(&format!("{salt}{password}")))
}

/// A complete credentials-file line for `username` with a fresh random salt.
#[must_use]
pub fn credential_line(username: &str, password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{username}:{}", hash_password(password, &salt))
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
