use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::Brand;
use business::domain::catalog::repository::BrandRepository;
use business::domain::errors::RepositoryError;

use super::entity::BrandEntity;
use crate::error::map_sqlx_error;

pub struct BrandRepositoryPostgres {
    pool: PgPool,
}

impl BrandRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for BrandRepositoryPostgres {
    async fn get_all_ordered_by_name(&self) -> Result<Vec<Brand>, RepositoryError> {
        let entities = sqlx::query_as::<_, BrandEntity>(
            "SELECT id, name, slug FROM brands ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error("list_brands"))?;

        Ok(entities.into_iter().map(Brand::from).collect())
    }
}
