use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::list_products::{
    ListCartProductsParams, ListCartProductsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::DenseId;

pub struct ListCartProductsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCartProductsUseCase for ListCartProductsUseCaseImpl {
    async fn execute(&self, params: ListCartProductsParams) -> Result<Vec<LineItem>, CartError> {
        self.logger
            .debug(&format!("Listing products of cart: {}", params.cart_id));

        let mut carts = self.repository.load().await?;
        let id = DenseId::parse(&params.cart_id, carts.len()).ok_or(CartError::NotFound)?;

        Ok(carts.swap_remove(id.index()).products)
    }
}
