use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

pub struct DeleteCartParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartParams) -> Result<u32, CartError>;
}
