use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItem;

pub struct ListCartProductsParams {
    pub cart_id: String,
}

#[async_trait]
pub trait ListCartProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListCartProductsParams) -> Result<Vec<LineItem>, CartError>;
}
