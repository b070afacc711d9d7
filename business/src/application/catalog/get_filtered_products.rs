use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::catalog::deadline::within;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductListing;
use crate::domain::catalog::page::Page;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_filtered_products::{
    GetFilteredProductsParams, GetFilteredProductsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetFilteredProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

#[async_trait]
impl GetFilteredProductsUseCase for GetFilteredProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFilteredProductsParams,
    ) -> Result<Page<ProductListing>, CatalogError> {
        let GetFilteredProductsParams { criteria, page } = params;
        self.logger.debug(&format!(
            "Listing products: search={:?} categories={:?} brands={:?} sort={} {} page={} per_page={}",
            criteria.search,
            criteria.category_ids,
            criteria.brand_ids,
            criteria.sort_field,
            criteria.sort_direction,
            page.page,
            page.per_page,
        ));

        let result = within(
            self.timeout,
            self.repository.get_filtered_products(&criteria, page),
        )
        .await;

        match &result {
            Ok(listing) => self.logger.info(&format!(
                "Listed {} of {} matching products (page {})",
                listing.items.len(),
                listing.total,
                listing.current_page
            )),
            Err(err) => self
                .logger
                .error(&format!("Failed to list products: {}", err)),
        }
        result
    }
}
