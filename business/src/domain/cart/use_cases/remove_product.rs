use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

pub struct RemoveProductFromCartParams {
    pub cart_id: String,
    pub product_id: String,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    /// Drops a product's whole line item and returns the cart identifier.
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<u32, CartError>;
}
