use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use business::domain::errors::RepositoryError;

use crate::blob_store::BlobStore;

#[derive(Error, Debug)]
enum ReloadError {
    #[error("collection.read_error: {0}")]
    Read(#[from] std::io::Error),
    #[error("collection.decode_error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A whole collection stored as one JSON array under a single key.
///
/// Keeps the last records it read or wrote. When a reload fails the failure
/// is logged and that snapshot is served instead, so callers never see read
/// errors. The snapshot starts out empty.
pub struct BlobCollection<E> {
    store: Arc<dyn BlobStore>,
    key: String,
    snapshot: Mutex<Vec<E>>,
}

impl<E> BlobCollection<E>
where
    E: Serialize + DeserializeOwned + Clone + Send,
{
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            snapshot: Mutex::new(Vec::new()),
        }
    }

    pub async fn load(&self) -> Vec<E> {
        match self.reload().await {
            Ok(records) => {
                *self.snapshot() = records.clone();
                records
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "reload failed, serving last snapshot");
                self.snapshot().clone()
            }
        }
    }

    /// Replaces the snapshot and writes the full array back, pretty-printed.
    pub async fn save(&self, records: Vec<E>) -> Result<(), RepositoryError> {
        let body = serde_json::to_string_pretty(&records).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to encode collection");
            RepositoryError::serialization()
        })?;

        *self.snapshot() = records;

        self.store.save(&self.key, &body).await.map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to write collection");
            RepositoryError::persistence()
        })
    }

    async fn reload(&self) -> Result<Vec<E>, ReloadError> {
        let raw = self.store.load(&self.key).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn snapshot(&self) -> MutexGuard<'_, Vec<E>> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob_store::MemoryBlobStore;
    use std::io;

    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl BlobStore for FailingStore {
        async fn load(&self, _key: &str) -> io::Result<String> {
            Err(io::Error::other("disk on fire"))
        }
        async fn save(&self, _key: &str, _data: &str) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[tokio::test]
    async fn should_serve_empty_snapshot_when_blob_missing_at_startup() {
        let collection: BlobCollection<u32> =
            BlobCollection::new(Arc::new(MemoryBlobStore::new()), "numbers.json");

        assert!(collection.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_serve_last_snapshot_when_blob_becomes_unreadable() {
        let store = Arc::new(MemoryBlobStore::new().with_blob("numbers.json", "[1, 2, 3]"));
        let collection: BlobCollection<u32> = BlobCollection::new(store.clone(), "numbers.json");
        assert_eq!(collection.load().await, vec![1, 2, 3]);

        store.save("numbers.json", "not json").await.unwrap();

        assert_eq!(collection.load().await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_write_pretty_json_with_two_space_indent() {
        let store = Arc::new(MemoryBlobStore::new());
        let collection: BlobCollection<u32> = BlobCollection::new(store.clone(), "numbers.json");

        collection.save(vec![7, 8]).await.unwrap();

        assert_eq!(store.get("numbers.json").unwrap(), "[\n  7,\n  8\n]");
    }

    #[tokio::test]
    async fn should_keep_written_records_in_snapshot_when_write_fails() {
        let collection: BlobCollection<u32> =
            BlobCollection::new(Arc::new(FailingStore), "numbers.json");

        let result = collection.save(vec![4]).await;

        assert!(matches!(result, Err(RepositoryError::Persistence)));
        assert_eq!(collection.load().await, vec![4]);
    }
}
