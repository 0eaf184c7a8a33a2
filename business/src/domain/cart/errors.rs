#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_not_in_cart")]
    ProductNotInCart,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
