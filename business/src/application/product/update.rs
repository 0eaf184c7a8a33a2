use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::value_objects::{AdminPolicy, DenseId};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub admin: AdminPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<u32, ProductError> {
        if !self.admin.is_admin() {
            self.logger.warn("Rejected product update: admin gate is off");
            return Err(ProductError::Unauthorized);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut products = self.repository.load().await?;
        let id = DenseId::parse(&params.id, products.len()).ok_or(ProductError::NotFound)?;

        // Full replace: fields not supplied are not carried over.
        products[id.index()] = Product::new(id, params.fields);

        if let Err(e) = self.repository.save_all(&products).await {
            self.logger
                .error(&format!("Failed to persist products after update: {}", e));
        }

        self.logger.info(&format!("Product updated: {}", id));
        Ok(id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductFields;
    use chrono::{Duration, Utc};
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

    fn stored() -> Vec<Product> {
        let yesterday = Utc::now() - Duration::days(1);
        vec![
            Product::from_repository(
                1,
                yesterday,
                "Cuaderno".to_string(),
                "Tapa dura".to_string(),
                "CU-1".to_string(),
                "cuaderno.png".to_string(),
                80.0,
                20,
            ),
            Product::from_repository(
                2,
                yesterday,
                "Mochila".to_string(),
                "Azul".to_string(),
                "MO-2".to_string(),
                "mochila.png".to_string(),
                1500.0,
                3,
            ),
        ]
    }

    #[tokio::test]
    async fn should_replace_whole_record_when_id_in_range() {
        let mut mock_repo = MockProductRepo::new();
        let before = Utc::now();
        mock_repo.expect_load().returning(|| Ok(stored()));
        mock_repo
            .expect_save_all()
            .withf(move |products| {
                let updated = &products[1];
                products.len() == 2
                    && updated.id == 2
                    && updated.name == "Mochila Roja"
                    && updated.description.is_empty()
                    && updated.stock == 0
                    && updated.timestamp >= before
                    && products[0].name == "Cuaderno"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            admin: AdminPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: "2".to_string(),
                fields: ProductFields {
                    name: "Mochila Roja".to_string(),
                    ..ProductFields::default()
                },
            })
            .await;

        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_out_of_range_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().returning(|| Ok(stored()));
        mock_repo.expect_save_all().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            admin: AdminPolicy::default(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: "3".to_string(),
                fields: ProductFields::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_check_admin_gate_before_validating_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_load().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            admin: AdminPolicy::new(false),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: "abc".to_string(),
                fields: ProductFields::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Unauthorized));
    }
}
