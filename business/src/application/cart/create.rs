use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::DenseId;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<u32, CartError> {
        let mut carts = self.repository.load().await?;
        let id = DenseId::next(carts.len());
        carts.push(Cart::new(id));

        if let Err(e) = self.repository.save_all(&carts).await {
            self.logger
                .error(&format!("Failed to persist carts after create: {}", e));
        }

        self.logger.info(&format!("Cart created with id: {}", id));
        Ok(id.value())
    }
}
