use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductFields;

pub struct CreateProductParams {
    pub fields: ProductFields,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Appends a product and returns its identifier.
    async fn execute(&self, params: CreateProductParams) -> Result<u32, ProductError>;
}
