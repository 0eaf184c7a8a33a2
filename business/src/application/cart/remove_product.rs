use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::DenseId;

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<u32, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.cart_id
        ));

        let mut carts = self.repository.load().await?;
        let cart_id = DenseId::parse(&params.cart_id, carts.len()).ok_or(CartError::NotFound)?;

        let products = self.product_repository.load().await?;
        let product_id = DenseId::parse(&params.product_id, products.len())
            .ok_or(CartError::ProductNotFound)?;

        let removed = carts[cart_id.index()].remove_product(product_id.value())?;

        if let Err(e) = self.repository.save_all(&carts).await {
            self.logger
                .error(&format!("Failed to persist carts after remove: {}", e));
        }

        self.logger.info(&format!(
            "Product {} removed from cart {} (quantity {})",
            product_id, cart_id, removed.quantity
        ));
        Ok(cart_id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, LineItem};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Vec<Cart>, RepositoryError>;
            async fn save_all(&self, carts: &[Cart]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn load(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn save_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn three_products() -> MockProductRepo {
        let mut repo = MockProductRepo::new();
        let now = Utc::now();
        repo.expect_load().returning(move || {
            Ok((1..=3)
                .map(|id| {
                    Product::from_repository(
                        id,
                        now,
                        format!("Producto {}", id),
                        String::new(),
                        String::new(),
                        String::new(),
                        1.0,
                        1,
                    )
                })
                .collect())
        });
        repo
    }

    fn cart_with_items() -> Vec<Cart> {
        vec![Cart::from_repository(
            1,
            vec![
                LineItem {
                    product_id: 1,
                    quantity: 4,
                },
                LineItem {
                    product_id: 3,
                    quantity: 1,
                },
            ],
        )]
    }

    #[tokio::test]
    async fn should_remove_whole_line_item_when_product_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(cart_with_items()));
        mock_repo
            .expect_save_all()
            .withf(|carts| {
                carts[0].products
                    == [LineItem {
                        product_id: 3,
                        quantity: 1,
                    }]
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(three_products()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: "1".to_string(),
                product_id: "1".to_string(),
            })
            .await;

        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_return_not_in_cart_without_persisting_when_product_never_added() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(cart_with_items()));
        mock_repo.expect_save_all().never();

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(three_products()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: "1".to_string(),
                product_id: "2".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotInCart));
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_product_id_not_numeric() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(cart_with_items()));
        mock_repo.expect_save_all().never();

        let use_case = RemoveProductFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(three_products()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveProductFromCartParams {
                cart_id: "1".to_string(),
                product_id: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }
}
