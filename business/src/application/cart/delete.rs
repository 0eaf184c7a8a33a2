use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{DenseId, remove_and_renumber};

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<u32, CartError> {
        self.logger.info(&format!("Deleting cart: {}", params.id));

        let mut carts = self.repository.load().await?;
        let id = DenseId::parse(&params.id, carts.len()).ok_or(CartError::NotFound)?;

        remove_and_renumber(&mut carts, id);

        if let Err(e) = self.repository.save_all(&carts).await {
            self.logger
                .error(&format!("Failed to persist carts after delete: {}", e));
        }

        self.logger.info(&format!("Cart deleted: {}", id));
        Ok(id.value())
    }
}
