use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::filter::FilterCriteria;
use business::domain::catalog::model::ProductListing;
use business::domain::catalog::page::{Page, PageRequest};
use business::domain::catalog::repository::ProductRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductListingEntity;
use super::query::{by_id_query, count_query, listing_query};
use crate::error::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_filtered_products(
        &self,
        criteria: &FilterCriteria,
        page: PageRequest,
    ) -> Result<Page<ProductListing>, RepositoryError> {
        let total = self.count_filtered_products(criteria).await?;
        if page.is_empty() || total == 0 {
            return Ok(Page::empty(total, page));
        }

        let mut query = listing_query(criteria, page);
        tracing::debug!(sql = query.sql(), "listing products");
        let entities = query
            .build_query_as::<ProductListingEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("list_products"))?;

        let items = entities
            .into_iter()
            .map(ProductListingEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total, page))
    }

    async fn count_filtered_products(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<u64, RepositoryError> {
        let mut query = count_query(criteria);
        tracing::debug!(sql = query.sql(), "counting products");
        let total: i64 = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("count_products"))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn get_by_id(&self, id: i64) -> Result<ProductListing, RepositoryError> {
        let mut query = by_id_query(id);
        let entity = query
            .build_query_as::<ProductListingEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error("get_product_by_id"))?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }
}
