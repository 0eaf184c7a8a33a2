use std::sync::Arc;

use business::domain::shared::value_objects::AdminPolicy;
use logger::TracingLogger;
use persistence::blob_store::{BlobStore, FileBlobStore};
use persistence::cart::repository::CartRepositoryFile;
use persistence::product::repository::ProductRepositoryFile;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::list_products::ListCartProductsUseCaseImpl;
use business::application::cart::remove_product::RemoveProductFromCartUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::{app_config::AppConfig, storage_config::StorageConfig};

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.storage.data_dir).await?;
        tracing::info!(
            data_dir = %config.storage.data_dir.display(),
            admin = config.admin.is_admin(),
            "using file storage"
        );

        let store = Arc::new(FileBlobStore::new(&config.storage.data_dir));
        Ok(Self::with_store(store, &config.storage, config.admin))
    }

    /// Wires every adapter and use case on top of the given blob store.
    pub fn with_store(
        store: Arc<dyn BlobStore>,
        storage: &StorageConfig,
        admin: AdminPolicy,
    ) -> Self {
        let product_logger = Arc::new(TracingLogger::new("products"));
        let cart_logger = Arc::new(TracingLogger::new("carts"));

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryFile::new(
            store.clone(),
            storage.products_file.clone(),
        ));
        let cart_repository = Arc::new(CartRepositoryFile::new(
            store,
            storage.carts_file.clone(),
        ));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            admin,
            logger: product_logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            admin,
            logger: product_logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            admin,
            logger: product_logger,
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let delete_cart_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let list_cart_products_use_case = Arc::new(ListCartProductsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let add_product_to_cart_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_product_from_cart_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: cart_repository,
            product_repository,
            logger: cart_logger,
        });

        let product_api = ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let cart_api = CartApi::new(
            create_cart_use_case,
            delete_cart_use_case,
            list_cart_products_use_case,
            add_product_to_cart_use_case,
            remove_product_from_cart_use_case,
        );

        Self {
            health_api: HealthApi,
            product_api,
            cart_api,
        }
    }
}
