use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductBody, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalogue API
///
/// Identifiers are positions: deleting a product shifts every later
/// product down by one.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/api/productos", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/productos/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Appends a product and returns its identifier. Accepts JSON or
    /// form-encoded bodies. Requires the admin gate.
    #[oai(path = "/api/productos", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: ProductBody) -> MutateProductResponse {
        let params = CreateProductParams {
            fields: body.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(id) => MutateProductResponse::Ok(Json(id)),
            Err(err) => MutateProductResponse::from_error(err.into_error_response()),
        }
    }

    /// Replace a product
    ///
    /// Overwrites every field and the timestamp. Requires the admin gate.
    #[oai(path = "/api/productos/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: ProductBody,
    ) -> MutateProductResponse {
        let params = UpdateProductParams {
            id: id.0,
            fields: body.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(id) => MutateProductResponse::Ok(Json(id)),
            Err(err) => MutateProductResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a product
    ///
    /// Removes the product and renumbers the rest. Requires the admin gate.
    #[oai(path = "/api/productos/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> MutateProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(id) => MutateProductResponse::Ok(Json(id)),
            Err(err) => MutateProductResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Create, update and delete all answer with the affected identifier.
#[derive(poem_openapi::ApiResponse)]
pub enum MutateProductResponse {
    #[oai(status = 200)]
    Ok(Json<u32>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MutateProductResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            403 => MutateProductResponse::Forbidden(json),
            404 => MutateProductResponse::NotFound(json),
            _ => MutateProductResponse::InternalError(json),
        }
    }
}
