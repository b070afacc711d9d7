use sqlx::FromRow;

use business::domain::catalog::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<CategoryEntity> for Category {
    fn from(entity: CategoryEntity) -> Self {
        Category {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }
}
