use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductFields;

pub struct UpdateProductParams {
    pub id: String,
    pub fields: ProductFields,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<u32, ProductError>;
}
