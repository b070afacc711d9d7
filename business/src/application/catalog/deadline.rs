use std::future::Future;
use std::time::Duration;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::RepositoryError;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs one storage round trip, giving up after `limit`.
pub(crate) async fn within<T>(
    limit: Duration,
    query: impl Future<Output = Result<T, RepositoryError>>,
) -> Result<T, CatalogError> {
    tokio::time::timeout(limit, query)
        .await
        .map_err(|_| CatalogError::Timeout)?
        .map_err(CatalogError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_pass_through_result_when_query_finishes_in_time() {
        let result = within(Duration::from_secs(1), async { Ok::<_, RepositoryError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn should_report_timeout_when_query_is_too_slow() {
        let result = within(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, RepositoryError>(())
        })
        .await;

        assert!(matches!(result, Err(CatalogError::Timeout)));
    }

    #[tokio::test]
    async fn should_wrap_repository_error() {
        let result = within(Duration::from_secs(1), async {
            Err::<(), _>(RepositoryError::Unavailable)
        })
        .await;

        assert!(matches!(
            result,
            Err(CatalogError::Repository(RepositoryError::Unavailable))
        ));
    }
}
