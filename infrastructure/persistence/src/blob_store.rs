use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

/// Key/blob storage for serialized collections.
///
/// The store moves raw strings only. Encoding belongs to the collection on
/// top of it.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn load(&self, key: &str) -> io::Result<String>;
    async fn save(&self, key: &str, data: &str) -> io::Result<()>;
}

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn load(&self, key: &str) -> io::Result<String> {
        tokio::fs::read_to_string(self.path_for(key)).await
    }

    async fn save(&self, key: &str, data: &str) -> io::Result<()> {
        tokio::fs::write(self.path_for(key), data).await
    }
}

/// Process-local store, used when no files should be touched.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(self, key: &str, data: &str) -> Self {
        self.put(key, data);
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, data: &str) {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), data.to_string());
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn load(&self, key: &str) -> io::Result<String> {
        self.get(key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no blob for {key}")))
    }

    async fn save(&self, key: &str, data: &str) -> io::Result<()> {
        self.put(key, data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tienda-blob-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn should_write_and_read_back_file_blob() {
        let dir = scratch_dir();
        let store = FileBlobStore::new(&dir);

        store.save("products.json", "[]").await.unwrap();
        let data = store.load("products.json").await.unwrap();

        assert_eq!(data, "[]");
        assert!(dir.join("products.json").exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn should_fail_with_not_found_when_file_missing() {
        let dir = scratch_dir();
        let store = FileBlobStore::new(&dir);

        let err = store.load("carts.json").await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn should_overwrite_memory_blob_on_save() {
        let store = MemoryBlobStore::new().with_blob("carts.json", "[]");

        store.save("carts.json", "[{\"id\":1}]").await.unwrap();

        assert_eq!(store.get("carts.json").as_deref(), Some("[{\"id\":1}]"));
        assert!(store.load("products.json").await.is_err());
    }
}
