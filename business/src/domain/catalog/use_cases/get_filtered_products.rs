use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::FilterCriteria;
use crate::domain::catalog::model::ProductListing;
use crate::domain::catalog::page::{Page, PageRequest};

pub struct GetFilteredProductsParams {
    pub criteria: FilterCriteria,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetFilteredProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFilteredProductsParams,
    ) -> Result<Page<ProductListing>, CatalogError>;
}
