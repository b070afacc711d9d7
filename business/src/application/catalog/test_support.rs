use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::catalog::filter::FilterCriteria;
use crate::domain::catalog::model::{Brand, Category, Product, ProductListing};
use crate::domain::catalog::page::{Page, PageRequest};
use crate::domain::catalog::repository::{BrandRepository, CategoryRepository, ProductRepository};
use crate::domain::catalog::value_objects::Price;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_filtered_products(
            &self,
            criteria: &FilterCriteria,
            page: PageRequest,
        ) -> Result<Page<ProductListing>, RepositoryError>;
        async fn count_filtered_products(&self, criteria: &FilterCriteria) -> Result<u64, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<ProductListing, RepositoryError>;
    }
}

mock! {
    pub BrandRepo {}

    #[async_trait]
    impl BrandRepository for BrandRepo {
        async fn get_all_ordered_by_name(&self) -> Result<Vec<Brand>, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all_ordered_by_name(&self) -> Result<Vec<Category>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn listing(id: i64, name: &str) -> ProductListing {
    ProductListing {
        product: Product {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            price: Price::from_cents(99_900),
            stock: 3,
            brand_id: 1,
            category_id: 1,
        },
        brand: Brand {
            id: 1,
            name: "Apple".to_string(),
            slug: "apple".to_string(),
        },
        category: Category {
            id: 1,
            name: "Smartphones".to_string(),
            slug: "smartphones".to_string(),
        },
    }
}
