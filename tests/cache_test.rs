use std::path::PathBuf;

use qdlcli::management::CatalogCacheManager;
use qdlcli::types::CatalogListing;
use qdlcli::url::UrlKind;
use serde_json::json;

// Helper function to create a cache root unique to one test
fn create_test_root(name: &str) -> PathBuf {
    let mut root = std::env::temp_dir();
    root.push(format!("qdlcli-test-{}-{}", name, std::process::id()));
    root
}

fn create_test_listing() -> CatalogListing {
    CatalogListing {
        kind: UrlKind::Artist,
        id: "36819".to_string(),
        name: "Radiohead".to_string(),
        items: vec![json!({ "id": "1", "title": "OK Computer" })],
    }
}

#[tokio::test]
async fn test_listing_round_trips_through_cache() {
    let root = create_test_root("roundtrip");

    CatalogCacheManager::new(UrlKind::Artist, "36819".to_string(), Some(create_test_listing()))
        .with_root(root.clone())
        .save_to_cache()
        .await
        .unwrap();

    let cached = CatalogCacheManager::new(UrlKind::Artist, "36819".to_string(), None)
        .with_root(root.clone())
        .load_from_cache()
        .await
        .unwrap();
    let listing = cached.get_listing().unwrap();

    assert_eq!(listing.name, "Radiohead");
    assert_eq!(listing.items.len(), 1);
    assert!(root.join("artist/36819.json").is_file());

    let _ = std::fs::remove_dir_all(root);
}

#[tokio::test]
async fn test_missing_cache_is_an_error() {
    let root = create_test_root("missing");

    let result = CatalogCacheManager::new(UrlKind::Label, "1153".to_string(), None)
        .with_root(root)
        .load_from_cache()
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_saving_without_listing_writes_nothing() {
    let root = create_test_root("empty");

    CatalogCacheManager::new(UrlKind::Label, "1153".to_string(), None)
        .with_root(root.clone())
        .save_to_cache()
        .await
        .unwrap();

    assert!(!root.join("label/1153.json").exists());
}
