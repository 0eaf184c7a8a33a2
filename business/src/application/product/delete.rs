use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::shared::value_objects::{AdminPolicy, DenseId, remove_and_renumber};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub admin: AdminPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<u32, ProductError> {
        if !self.admin.is_admin() {
            self.logger.warn("Rejected product deletion: admin gate is off");
            return Err(ProductError::Unauthorized);
        }

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let mut products = self.repository.load().await?;
        let id = DenseId::parse(&params.id, products.len()).ok_or(ProductError::NotFound)?;

        let removed = remove_and_renumber(&mut products, id);

        if let Err(e) = self.repository.save_all(&products).await {
            self.logger
                .error(&format!("Failed to persist products after delete: {}", e));
        }

        self.logger.info(&format!(
            "Product deleted: {} ({}), {} remaining",
            id,
            removed.name,
            products.len()
        ));
        Ok(id.value())
    }
}
