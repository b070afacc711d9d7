use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::FilterCriteria;
use super::model::{Brand, Category, ProductListing};
use super::page::{Page, PageRequest};

/// Read access to the product catalog.
///
/// Filter dimensions combine with AND; ids inside one dimension combine
/// with OR. Results are ordered by the requested field and then by id
/// ascending so equal sort keys come back in a stable order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of matching products, brand and category attached. `total`
    /// counts every match, not just the returned page.
    async fn get_filtered_products(
        &self,
        criteria: &FilterCriteria,
        page: PageRequest,
    ) -> Result<Page<ProductListing>, RepositoryError>;

    /// Number of products matching `criteria`, without fetching rows.
    async fn count_filtered_products(&self, criteria: &FilterCriteria)
    -> Result<u64, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<ProductListing, RepositoryError>;
}

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn get_all_ordered_by_name(&self) -> Result<Vec<Brand>, RepositoryError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all_ordered_by_name(&self) -> Result<Vec<Category>, RepositoryError>;
}
