use chrono::{TimeZone, Utc};
use lectern_blobstore::{
    ARTICLE_IMAGES_BUCKET, BOOKS_BUCKET, BlobStore, UploadReceipt, object_key,
};
use lectern_types::{ErrorCode, LatencyProfile, ManualClock, NoLatency, SimulatedLatency};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

const BASE: &str = "http://localhost:54321";

fn store() -> BlobStore {
    BlobStore::in_memory(BASE)
}

// ── Upload and read ─────────────────────────────────────────────

#[tokio::test]
async fn upload_returns_key_as_path() {
    let store = store();
    let receipt = store
        .upload(ARTICLE_IMAGES_BUCKET, "1700000000000.png", b"png data".to_vec())
        .await
        .unwrap();
    assert_eq!(
        receipt,
        UploadReceipt {
            path: "1700000000000.png".to_string()
        }
    );
}

#[tokio::test]
async fn upload_and_read() {
    let store = store();
    store.upload(BOOKS_BUCKET, "book.pdf", &b"%PDF"[..]).await.unwrap();
    assert_eq!(store.read(BOOKS_BUCKET, "book.pdf").await.unwrap(), b"%PDF");
}

#[tokio::test]
async fn upload_overwrites_silently() {
    let store = store();
    store.upload("ns", "k", b"first".to_vec()).await.unwrap();
    store.upload("ns", "k", b"second".to_vec()).await.unwrap();

    assert_eq!(store.read("ns", "k").await.unwrap(), b"second");
    assert_eq!(store.list("ns").await.len(), 1);
}

#[tokio::test]
async fn read_missing_is_not_found() {
    let store = store();
    let err = store.read("ns", "nope").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(err.to_string().contains("ns"));
    assert!(err.to_string().contains("nope"));
}

#[tokio::test]
async fn buckets_are_independent() {
    let store = store();
    store.upload("a", "same", b"x".to_vec()).await.unwrap();
    assert!(store.exists("a", "same").await);
    assert!(!store.exists("b", "same").await);
    assert!(store.read("b", "same").await.is_err());
}

// ── Metadata and listing ────────────────────────────────────────

#[tokio::test]
async fn metadata_records_size_hash_and_time() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let store = BlobStore::new(BASE, Arc::new(NoLatency), Arc::new(ManualClock::new(at)));
    store.upload("ns", "b1", b"hello".to_vec()).await.unwrap();

    let meta = store.metadata("ns", "b1").await.unwrap();
    assert_eq!(meta.bucket, "ns");
    assert_eq!(meta.key, "b1");
    assert_eq!(meta.size, 5);
    // sha256("hello")
    assert_eq!(
        meta.content_hash,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(meta.uploaded_at, at);
}

#[tokio::test]
async fn metadata_missing_is_not_found() {
    let err = store().metadata("ns", "nope").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_is_ordered_by_key() {
    let store = store();
    for key in ["c.png", "a.png", "b.png"] {
        store.upload("ns", key, b"x".to_vec()).await.unwrap();
    }
    store.upload("other", "0.png", b"y".to_vec()).await.unwrap();

    let keys: Vec<_> = store.list("ns").await.into_iter().map(|m| m.key).collect();
    assert_eq!(keys, vec!["a.png", "b.png", "c.png"]);
    assert!(store.list("empty").await.is_empty());
}

#[tokio::test]
async fn metadata_serializes() {
    let store = store();
    store.upload("ns", "s1", b"ser".to_vec()).await.unwrap();
    let json = serde_json::to_value(&store.list("ns").await[0]).unwrap();
    assert_eq!(json["key"], "s1");
    assert_eq!(json["bucket"], "ns");
    assert_eq!(json["size"], 3);
}

// ── Public URLs ─────────────────────────────────────────────────

#[test]
fn public_url_format() {
    let store = store();
    assert_eq!(
        store.public_url(ARTICLE_IMAGES_BUCKET, "1700000000000.png"),
        "http://localhost:54321/storage/v1/object/public/article-images/1700000000000.png"
    );
}

#[test]
fn public_url_does_not_require_object() {
    let store = store();
    assert!(store.public_url(BOOKS_BUCKET, "missing.pdf").ends_with("/books/missing.pdf"));
}

#[test]
fn public_url_normalizes_slashes() {
    let store = BlobStore::in_memory("https://cdn.example.com/");
    assert_eq!(store.base_url(), "https://cdn.example.com");
    assert_eq!(
        store.public_url("books", "/a.pdf"),
        "https://cdn.example.com/storage/v1/object/public/books/a.pdf"
    );
}

// ── Object keys ─────────────────────────────────────────────────

#[test]
fn object_key_uses_millis_and_extension() {
    let clock = ManualClock::new(Utc.timestamp_millis_opt(1_700_000_000_123).unwrap());
    assert_eq!(object_key("cover.photo.JPG", &clock), "1700000000123.JPG");
    assert_eq!(object_key("README", &clock), "1700000000123");
    assert_eq!(object_key("trailing.", &clock), "1700000000123");
}

// ── Latency ─────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn upload_waits_for_simulated_latency() {
    let store = BlobStore::new(
        BASE,
        Arc::new(SimulatedLatency::new(LatencyProfile::default())),
        Arc::new(lectern_types::SystemClock),
    );
    let start = tokio::time::Instant::now();
    store.upload("ns", "k", b"x".to_vec()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1500));
}
