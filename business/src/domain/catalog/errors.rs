use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.timeout")]
    Timeout,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
