use sqlx::FromRow;

use business::domain::catalog::model::Brand;

#[derive(Debug, FromRow)]
pub struct BrandEntity {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<BrandEntity> for Brand {
    fn from(entity: BrandEntity) -> Self {
        Brand {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }
}
