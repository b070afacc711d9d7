use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::catalog::deadline::within;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::FilterOptions;
use crate::domain::catalog::repository::{BrandRepository, CategoryRepository};
use crate::domain::catalog::use_cases::get_filter_options::GetFilterOptionsUseCase;
use crate::domain::logger::Logger;

pub struct GetFilterOptionsUseCaseImpl {
    pub brand_repository: Arc<dyn BrandRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

#[async_trait]
impl GetFilterOptionsUseCase for GetFilterOptionsUseCaseImpl {
    async fn execute(&self) -> Result<FilterOptions, CatalogError> {
        let brands = within(self.timeout, self.brand_repository.get_all_ordered_by_name()).await?;
        let categories = within(
            self.timeout,
            self.category_repository.get_all_ordered_by_name(),
        )
        .await?;

        self.logger.debug(&format!(
            "Loaded filter options: {} brands, {} categories",
            brands.len(),
            categories.len()
        ));
        Ok(FilterOptions { brands, categories })
    }
}
