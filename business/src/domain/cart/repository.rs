use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<Cart>, RepositoryError>;
    async fn save_all(&self, carts: &[Cart]) -> Result<(), RepositoryError>;
}
