use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::FilterOptions;

#[async_trait]
pub trait GetFilterOptionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<FilterOptions, CatalogError>;
}
