use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Removes a product, renumbers the rest and returns the removed identifier.
    async fn execute(&self, params: DeleteProductParams) -> Result<u32, ProductError>;
}
