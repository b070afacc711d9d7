use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::Category;
use business::domain::catalog::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::error::map_sqlx_error;

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all_ordered_by_name(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name, slug FROM categories ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error("list_categories"))?;

        Ok(entities.into_iter().map(Category::from).collect())
    }
}
