use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    /// Appends an empty cart and returns its identifier.
    async fn execute(&self) -> Result<u32, CartError>;
}
