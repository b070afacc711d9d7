use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::FilterCriteria;
use crate::domain::catalog::model::FilterStats;

#[async_trait]
pub trait GetFilterStatsUseCase: Send + Sync {
    async fn execute(&self, criteria: FilterCriteria) -> Result<FilterStats, CatalogError>;
}
