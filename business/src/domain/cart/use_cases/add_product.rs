use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

pub struct AddProductToCartParams {
    pub cart_id: String,
    pub product_id: String,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    /// Adds one unit of a product to a cart and returns the cart identifier.
    async fn execute(&self, params: AddProductToCartParams) -> Result<u32, CartError>;
}
