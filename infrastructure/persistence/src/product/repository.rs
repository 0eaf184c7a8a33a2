use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::blob_store::BlobStore;
use crate::collection::BlobCollection;

pub struct ProductRepositoryFile {
    collection: BlobCollection<ProductEntity>,
}

impl ProductRepositoryFile {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            collection: BlobCollection::new(store, key),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryFile {
    async fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = self.collection.load().await;
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let entities = products.iter().map(ProductEntity::from_domain).collect();
        self.collection.save(entities).await
    }
}
