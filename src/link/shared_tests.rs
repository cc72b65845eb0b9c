use super::*;
use crate::link::parse_tags;
use tempfile::TempDir;

fn link(url: &str, tags: &str, notes: &str) -> Link {
    Link::new(url, parse_tags(tags), notes)
}

#[tokio::test]
async fn test_upsert_persists_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.json");
    let shared = SharedLinkStore::open(&path).await;

    shared
        .upsert(link("http://example.com", "a,b", "hi"))
        .await
        .unwrap();

    let on_disk = crate::link::read_links_file(&path).await.unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].tags, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_upsert_picks_up_external_file_changes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.json");
    let shared = SharedLinkStore::open(&path).await;

    // Another writer adds a link behind the store's back
    crate::link::write_links_file(&path, &[link("http://external.example", "", "")])
        .await
        .unwrap();

    shared
        .upsert(link("http://mine.example", "", ""))
        .await
        .unwrap();
    assert_eq!(shared.len().await, 2);
    assert!(shared.get("http://external.example").await.is_some());
}

#[tokio::test]
async fn test_remove_missing_url_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let shared = SharedLinkStore::open(temp_dir.path().join("links.json")).await;
    let removed = shared.remove("http://missing.example").await.unwrap();
    assert!(removed.is_none());
    assert_eq!(shared.len().await, 0);
}

#[tokio::test]
async fn test_remove_deletes_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.json");
    let shared = SharedLinkStore::open(&path).await;
    shared
        .upsert(link("http://example.com", "a", ""))
        .await
        .unwrap();

    let removed = shared.remove("http://example.com").await.unwrap();
    assert_eq!(removed.unwrap().url, "http://example.com");
    assert!(crate::link::read_links_file(&path).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_upserts_lose_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.json");
    let shared = SharedLinkStore::open(&path).await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            shared
                .upsert(link(&format!("http://example.com/{i}"), "bulk", ""))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(shared.reload().await, 20);
}

#[tokio::test]
async fn test_upsert_save_failure_keeps_memory_change() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be makes every save fail
    let path = temp_dir.path().join("links.json");
    std::fs::create_dir(&path).unwrap();
    let shared = SharedLinkStore::open(&path).await;

    let result = shared.upsert(link("http://example.com", "a", "")).await;
    assert!(result.is_err());
    assert!(shared.get("http://example.com").await.is_some());
}

#[tokio::test]
async fn test_search_uses_in_memory_links() {
    let temp_dir = TempDir::new().unwrap();
    let shared = SharedLinkStore::open(temp_dir.path().join("links.json")).await;
    shared
        .upsert(link("http://example.com", "golang", "great golang article"))
        .await
        .unwrap();

    let hits = shared
        .search(&SearchQuery::Terms(vec!["go".to_string()]))
        .await;
    assert_eq!(hits.len(), 1);
    let misses = shared.search(&SearchQuery::Tag("go".to_string())).await;
    assert!(misses.is_empty());
}
