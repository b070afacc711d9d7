use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::catalog::deadline::within;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::FilterCriteria;
use crate::domain::catalog::model::FilterStats;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_filter_stats::GetFilterStatsUseCase;
use crate::domain::logger::Logger;

pub struct GetFilterStatsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

#[async_trait]
impl GetFilterStatsUseCase for GetFilterStatsUseCaseImpl {
    async fn execute(&self, criteria: FilterCriteria) -> Result<FilterStats, CatalogError> {
        let total = within(
            self.timeout,
            self.repository.count_filtered_products(&criteria),
        )
        .await
        .inspect_err(|err| {
            self.logger
                .error(&format!("Failed to count filtered products: {}", err))
        })?;

        let stats = FilterStats {
            total,
            has_active_filters: criteria.has_active_filters(),
        };
        self.logger.info(&format!(
            "Filter stats: total={} active_filters={}",
            stats.total, stats.has_active_filters
        ));
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::test_support::{MockProductRepo, mock_logger};
    use crate::domain::catalog::value_objects::SortState;
    use crate::domain::errors::RepositoryError;

    fn use_case(repository: MockProductRepo) -> GetFilterStatsUseCaseImpl {
        GetFilterStatsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn should_count_without_fetching_rows() {
        let criteria = FilterCriteria::new(Some("test".to_string()), vec![], vec![], SortState::default());
        let expected = criteria.clone();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_filtered_products().never();
        mock_repo
            .expect_count_filtered_products()
            .times(1)
            .withf(move |c| *c == expected)
            .returning(|_| Ok(25));

        let stats = use_case(mock_repo).execute(criteria).await.unwrap();

        assert_eq!(
            stats,
            FilterStats {
                total: 25,
                has_active_filters: true
            }
        );
    }

    #[tokio::test]
    async fn should_report_inactive_filters_when_unfiltered() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count_filtered_products()
            .returning(|_| Ok(100));

        let stats = use_case(mock_repo)
            .execute(FilterCriteria::default())
            .await
            .unwrap();

        assert_eq!(stats.total, 100);
        assert!(!stats.has_active_filters);
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_count_filtered_products()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(mock_repo).execute(FilterCriteria::default()).await;

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
