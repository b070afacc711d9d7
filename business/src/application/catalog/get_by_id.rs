use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::catalog::deadline::within;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProductListing;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductListing, CatalogError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        within(self.timeout, self.repository.get_by_id(params.id))
            .await
            .map_err(|e| match e {
                CatalogError::Repository(RepositoryError::NotFound) => CatalogError::NotFound,
                other => other,
            })
    }
}
