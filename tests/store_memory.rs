use shorturl::domain::repositories::MappingStore;
use shorturl::infrastructure::persistence::MemoryStore;

#[tokio::test]
async fn test_put_if_absent_creates_once() {
    let store = MemoryStore::new();

    assert!(
        store
            .put_if_absent("aaa111", "https://example.com/first")
            .await
            .unwrap()
    );

    // A second write on the same code loses and leaves the entry unchanged.
    assert!(
        !store
            .put_if_absent("aaa111", "https://example.com/second")
            .await
            .unwrap()
    );
    assert_eq!(
        store.get("aaa111").await.unwrap(),
        Some("https://example.com/first".to_string())
    );
}

#[tokio::test]
async fn test_get_absent_code() {
    let store = MemoryStore::new();

    assert_eq!(store.get("zzzzzz").await.unwrap(), None);
}

#[tokio::test]
async fn test_add_to_index_is_idempotent() {
    let store = MemoryStore::new();

    store.add_to_index("aaa111").await.unwrap();
    store.add_to_index("aaa111").await.unwrap();

    let index = store.list_index().await.unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.contains("aaa111"));
}

#[tokio::test]
async fn test_index_tracks_reserved_codes() {
    let store = MemoryStore::new();

    for (code, url) in [
        ("aaa111", "https://example.com/a"),
        ("bbb222", "https://example.com/b"),
    ] {
        assert!(store.put_if_absent(code, url).await.unwrap());
        store.add_to_index(code).await.unwrap();
    }

    let index = store.list_index().await.unwrap();
    assert_eq!(index.len(), 2);
    for code in &index {
        assert!(store.get(code).await.unwrap().is_some());
    }
}
