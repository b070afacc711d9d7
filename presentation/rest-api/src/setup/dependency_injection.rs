use std::sync::Arc;

use logger::TracingLogger;
use persistence::brand::repository::BrandRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_filter_options::GetFilterOptionsUseCaseImpl;
use business::application::catalog::get_filter_stats::GetFilterStatsUseCaseImpl;
use business::application::catalog::get_filtered_products::GetFilteredProductsUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::CatalogApi;
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, catalog: CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("catalog"));
        let timeout = catalog.query_timeout;
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let brand_repository = Arc::new(BrandRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_filtered_products_use_case = Arc::new(GetFilteredProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            timeout,
        });
        let get_filter_stats_use_case = Arc::new(GetFilterStatsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            timeout,
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
            timeout,
        });
        let get_filter_options_use_case = Arc::new(GetFilterOptionsUseCaseImpl {
            brand_repository,
            category_repository,
            logger,
            timeout,
        });

        let catalog_api = CatalogApi::new(
            get_filtered_products_use_case,
            get_filter_stats_use_case,
            get_by_id_use_case,
            get_filter_options_use_case,
            catalog,
        );

        Self {
            health_api,
            catalog_api,
        }
    }
}
