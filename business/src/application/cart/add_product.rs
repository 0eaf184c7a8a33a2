use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItemChange;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::DenseId;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<u32, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
            params.product_id, params.cart_id
        ));

        let mut carts = self.repository.load().await?;
        let cart_id = DenseId::parse(&params.cart_id, carts.len()).ok_or(CartError::NotFound)?;

        let products = self.product_repository.load().await?;
        let product_id = DenseId::parse(&params.product_id, products.len())
            .ok_or(CartError::ProductNotFound)?;

        let change = carts[cart_id.index()].add_product(product_id.value());

        // Both branches persist, the new line item included.
        if let Err(e) = self.repository.save_all(&carts).await {
            self.logger
                .error(&format!("Failed to persist carts after add: {}", e));
        }

        match change {
            LineItemChange::Created => self.logger.info(&format!(
                "Product {} added to cart {}",
                product_id, cart_id
            )),
            LineItemChange::Incremented { quantity } => self.logger.info(&format!(
                "Product {} in cart {} now at quantity {}",
                product_id, cart_id, quantity
            )),
        }
        Ok(cart_id.value())
    }
}
