use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::list_products::{
    ListCartProductsParams, ListCartProductsUseCase,
};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};

use crate::api::cart::dto::LineItemResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
    list_products_use_case: Arc<dyn ListCartProductsUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
        list_products_use_case: Arc<dyn ListCartProductsUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            delete_use_case,
            list_products_use_case,
            add_product_use_case,
            remove_product_use_case,
        }
    }
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/api/carrito", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CartIdResponse {
        match self.create_use_case.execute().await {
            Ok(id) => CartIdResponse::Ok(Json(id)),
            Err(err) => CartIdResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a cart
    ///
    /// Removes the cart and renumbers the remaining carts.
    #[oai(path = "/api/carrito/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(&self, id: Path<String>) -> CartIdResponse {
        match self
            .delete_use_case
            .execute(DeleteCartParams { id: id.0 })
            .await
        {
            Ok(id) => CartIdResponse::Ok(Json(id)),
            Err(err) => CartIdResponse::from_error(err.into_error_response()),
        }
    }

    /// List the line items of a cart
    #[oai(
        path = "/api/carrito/:id/productos",
        method = "get",
        tag = "ApiTags::Carts"
    )]
    async fn list_products(&self, id: Path<String>) -> ListCartProductsResponse {
        match self
            .list_products_use_case
            .execute(ListCartProductsParams { cart_id: id.0 })
            .await
        {
            Ok(items) => ListCartProductsResponse::Ok(Json(
                items.into_iter().map(LineItemResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListCartProductsResponse::NotFound(json),
                    _ => ListCartProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add one unit of a product to a cart
    ///
    /// Creates the line item at quantity 1 or increments the existing one.
    #[oai(
        path = "/api/carrito/:id/productos/:id_prod",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_product(&self, id: Path<String>, id_prod: Path<String>) -> CartIdResponse {
        match self
            .add_product_use_case
            .execute(AddProductToCartParams {
                cart_id: id.0,
                product_id: id_prod.0,
            })
            .await
        {
            Ok(id) => CartIdResponse::Ok(Json(id)),
            Err(err) => CartIdResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a product from a cart
    ///
    /// Drops the whole line item whatever its quantity.
    #[oai(
        path = "/api/carrito/:id/productos/:id_prod",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_product(&self, id: Path<String>, id_prod: Path<String>) -> CartIdResponse {
        match self
            .remove_product_use_case
            .execute(RemoveProductFromCartParams {
                cart_id: id.0,
                product_id: id_prod.0,
            })
            .await
        {
            Ok(id) => CartIdResponse::Ok(Json(id)),
            Err(err) => CartIdResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartIdResponse {
    #[oai(status = 200)]
    Ok(Json<u32>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartIdResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => CartIdResponse::NotFound(json),
            _ => CartIdResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCartProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<LineItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
