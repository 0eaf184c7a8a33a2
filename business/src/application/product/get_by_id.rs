use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::shared::value_objects::DenseId;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let mut products = self.repository.load().await?;
        let id = DenseId::parse(&params.id, products.len()).ok_or(ProductError::NotFound)?;

        Ok(products.swap_remove(id.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
    use mockall::mock;

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

    fn catalog() -> Vec<Product> {
        let now = Utc::now();
        ["Escuadra", "Compas", "Transportador"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Product::from_repository(
                    i as u32 + 1,
                    now,
                    name.to_string(),
                    String::new(),
                    format!("C-{}", i + 1),
                    String::new(),
                    99.9,
                    5,
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn should_return_product_when_id_in_range() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(catalog()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: "2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.name, "Compas");
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_is_not_numeric() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(catalog()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_past_collection_end() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(catalog()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "4".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
