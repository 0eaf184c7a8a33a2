use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Whole-collection access to the product blob.
///
/// `load` reloads the full collection; `save_all` writes it back in one go.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
}
