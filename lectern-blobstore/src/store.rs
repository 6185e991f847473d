use chrono::{DateTime, Utc};
use lectern_types::{
    BackendError, BackendResult, NoLatency, Operation, SharedClock, SharedLatency, SystemClock,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Returned by [`BlobStore::upload`]: the key the object was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub path: String,
}

/// Metadata about a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobMetadata {
    pub bucket: String,
    pub key: String,
    pub size: u64,
    /// Hex-encoded SHA-256 of the object bytes.
    pub content_hash: String,
    pub uploaded_at: DateTime<Utc>,
}

struct Blob {
    bytes: Vec<u8>,
    meta: BlobMetadata,
}

/// Emulated object storage.
pub struct BlobStore {
    objects: RwLock<BTreeMap<(String, String), Blob>>,
    base_url: String,
    latency: SharedLatency,
    clock: SharedClock,
}

impl BlobStore {
    pub fn new(base_url: impl Into<String>, latency: SharedLatency, clock: SharedClock) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            objects: RwLock::new(BTreeMap::new()),
            base_url,
            latency,
            clock,
        }
    }

    /// No latency, system clock.
    pub fn in_memory(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(NoLatency), Arc::new(SystemClock))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stores `bytes` under `(bucket, key)`, replacing any existing object.
    pub async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: impl Into<Vec<u8>>,
    ) -> BackendResult<UploadReceipt> {
        self.latency.pause(Operation::Upload).await;

        let bytes = bytes.into();
        let meta = BlobMetadata {
            bucket: bucket.to_string(),
            key: key.to_string(),
            size: bytes.len() as u64,
            content_hash: hex::encode(Sha256::digest(&bytes)),
            uploaded_at: self.clock.now(),
        };
        let replaced = self
            .objects
            .write()
            .await
            .insert((bucket.to_string(), key.to_string()), Blob { bytes, meta })
            .is_some();

        debug!(bucket, key, replaced, "Uploaded object");
        Ok(UploadReceipt {
            path: key.to_string(),
        })
    }

    /// Public URL for `path` in `bucket`. Pure; the object need not exist.
    #[must_use]
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{}",
            self.base_url,
            path.trim_start_matches('/')
        )
    }

    /// Returns a copy of the object's bytes.
    pub async fn read(&self, bucket: &str, key: &str) -> BackendResult<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .map(|blob| blob.bytes.clone())
            .ok_or_else(|| BackendError::not_found(bucket, key))
    }

    pub async fn metadata(&self, bucket: &str, key: &str) -> BackendResult<BlobMetadata> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .map(|blob| blob.meta.clone())
            .ok_or_else(|| BackendError::not_found(bucket, key))
    }

    /// Metadata of every object in `bucket`, ordered by key.
    pub async fn list(&self, bucket: &str) -> Vec<BlobMetadata> {
        self.objects
            .read()
            .await
            .iter()
            .filter(|((b, _), _)| b == bucket)
            .map(|(_, blob)| blob.meta.clone())
            .collect()
    }

    pub async fn exists(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .read()
            .await
            .contains_key(&(bucket.to_string(), key.to_string()))
    }
}
