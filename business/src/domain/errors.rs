/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The store could not be reached (pool exhausted, closed, or I/O failure).
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.database_error")]
    DatabaseError,
}
