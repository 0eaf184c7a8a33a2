#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
