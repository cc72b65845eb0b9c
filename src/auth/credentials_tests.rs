use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_plaintext_lines() {
    let store = CredentialStore::parse("josh:hunter2\nalice:wonderland\n");
    assert_eq!(store.len(), 2);
    assert!(store.verify("josh", "hunter2"));
    assert!(store.verify("alice", "wonderland"));
}

#[test]
fn test_parse_splits_on_first_colon() {
    let store = CredentialStore::parse("josh:pa:ss:word");
    assert!(store.verify("josh", "pa:ss:word"));
    assert!(!store.verify("josh", "pa"));
}

#[test]
fn test_parse_last_duplicate_wins() {
    let store = CredentialStore::parse("josh:old\njosh:new\n");
    assert_eq!(store.len(), 1);
    assert!(store.verify("josh", "new"));
    assert!(!store.verify("josh", "old"));
}

#[test]
fn test_parse_skips_blank_comment_and_malformed_lines() {
    let store = CredentialStore::parse("# admins\n\njosh:pw\nno-colon-here\r\n");
    assert_eq!(store.len(), 1);
    assert!(store.contains_user("josh"));
    assert!(!store.contains_user("no-colon-here"));
}

#[test]
fn test_parse_strips_windows_line_endings() {
    let store = CredentialStore::parse("josh:pw\r\n");
    assert!(store.verify("josh", "pw"));
}

#[test]
fn test_verify_unknown_user_fails() {
    let store = CredentialStore::parse("josh:pw");
    assert!(!store.verify("mallory", "pw"));
}

#[test]
fn test_unknown_user_is_checked_against_a_hashed_secret() {
    let (salt, digest) = DUMMY_SECRET
        .strip_prefix(HASH_PREFIX)
        .and_then(|rest| rest.split_once('$'))
        .expect("dummy secret uses the hashed form");
    assert!(!salt.is_empty());
    assert_eq!(digest.len(), 64);

    let store = CredentialStore::parse("josh:pw");
    for password in ["", "pw", "0", DUMMY_SECRET] {
        assert!(!store.verify("mallory", password), "{password:?}");
        assert!(!verify_secret(DUMMY_SECRET, password), "{password:?}");
    }
}

#[test]
fn test_empty_password_is_allowed() {
    let store = CredentialStore::parse("guest:");
    assert!(store.verify("guest", ""));
    assert!(!store.verify("guest", "x"));
}

#[test]
fn test_hashed_secret_verifies() {
    let line = format!("josh:{}", hash_password("hunter2", "NaCl"));
    let store = CredentialStore::parse(&line);
    assert!(store.verify("josh", "hunter2"));
    assert!(!store.verify("josh", "hunter3"));
    // The stored form itself is not accepted as a password
    assert!(!store.verify("josh", &hash_password("hunter2", "NaCl")));
}

#[test]
fn test_hash_password_format() {
    let hashed = hash_password("pw", "salt");
    assert_eq!(
        hashed,
        format!("$sha256$salt${}", compute_hash("saltpw"))
    );
}

#[test]
fn test_credential_line_uses_random_salt() {
    let first = credential_line("josh", "pw");
    let second = credential_line("josh", "pw");
    assert!(first.starts_with("josh:$sha256$"));
    assert_ne!(first, second);

    let store = CredentialStore::parse(&first);
    assert!(store.verify("josh", "pw"));
}

#[tokio::test]
async fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.txt");
    std::fs::write(&path, "josh:pw\n").unwrap();

    let store = CredentialStore::load(&path).await.unwrap();
    assert!(store.verify("josh", "pw"));
}

#[tokio::test]
async fn test_load_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = CredentialStore::load(&temp_dir.path().join("users.txt"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("users.txt"));
}
