use business::domain::errors::RepositoryError;

/// Logs a failed query and translates it into the domain error.
pub(crate) fn map_sqlx_error(operation: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(operation, error = %err, "catalog query failed");
        classify(&err)
    }
}

fn classify(err: &sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable,
        _ => RepositoryError::DatabaseError,
    }
}
