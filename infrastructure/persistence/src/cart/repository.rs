use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartEntity;
use crate::blob_store::BlobStore;
use crate::collection::BlobCollection;

pub struct CartRepositoryFile {
    collection: BlobCollection<CartEntity>,
}

impl CartRepositoryFile {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            collection: BlobCollection::new(store, key),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryFile {
    async fn load(&self) -> Result<Vec<Cart>, RepositoryError> {
        let entities = self.collection.load().await;
        Ok(entities.into_iter().map(CartEntity::into_domain).collect())
    }

    async fn save_all(&self, carts: &[Cart]) -> Result<(), RepositoryError> {
        let entities = carts.iter().map(CartEntity::from_domain).collect();
        self.collection.save(entities).await
    }
}
