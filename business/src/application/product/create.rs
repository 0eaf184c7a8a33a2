use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::value_objects::{AdminPolicy, DenseId};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub admin: AdminPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<u32, ProductError> {
        if !self.admin.is_admin() {
            self.logger.warn("Rejected product creation: admin gate is off");
            return Err(ProductError::Unauthorized);
        }

        self.logger
            .info(&format!("Creating product: {}", params.fields.name));

        let mut products = self.repository.load().await?;
        let id = DenseId::next(products.len());
        products.push(Product::new(id, params.fields));

        if let Err(e) = self.repository.save_all(&products).await {
            self.logger
                .error(&format!("Failed to persist products after create: {}", e));
        }

        self.logger.info(&format!("Product created with id: {}", id));
        Ok(id.value())
    }
}
