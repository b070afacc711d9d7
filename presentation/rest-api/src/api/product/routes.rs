use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_filter_options::GetFilterOptionsUseCase;
use business::domain::catalog::use_cases::get_filter_stats::GetFilterStatsUseCase;
use business::domain::catalog::use_cases::get_filtered_products::{
    GetFilteredProductsParams, GetFilteredProductsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    FilterOptionsResponse, FilterStatsResponse, ProductPageResponse, ProductResponse,
};
use crate::api::product::query_string::{BrowseQuery, page_links};
use crate::api::tags::ApiTags;
use crate::config::catalog_config::CatalogConfig;

pub struct CatalogApi {
    get_filtered_products_use_case: Arc<dyn GetFilteredProductsUseCase>,
    get_filter_stats_use_case: Arc<dyn GetFilterStatsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_filter_options_use_case: Arc<dyn GetFilterOptionsUseCase>,
    config: CatalogConfig,
}

impl CatalogApi {
    pub fn new(
        get_filtered_products_use_case: Arc<dyn GetFilteredProductsUseCase>,
        get_filter_stats_use_case: Arc<dyn GetFilterStatsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_filter_options_use_case: Arc<dyn GetFilterOptionsUseCase>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            get_filtered_products_use_case,
            get_filter_stats_use_case,
            get_by_id_use_case,
            get_filter_options_use_case,
            config,
        }
    }
}

/// Catalog browsing API
///
/// Read-only endpoints for searching, filtering, sorting and paging products.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Returns one page of products matching the search text and the selected
    /// categories and brands. Unknown or malformed parameters fall back to
    /// their defaults instead of failing the request. `cat` and `brand` repeat
    /// once per id; `perPage=0` returns no items but still reports the total.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_filtered_products(
        &self,
        q: Query<Option<String>>,
        cat: Query<Vec<String>>,
        brand: Query<Vec<String>>,
        #[oai(name = "sortBy")]
        sort_by: Query<Option<String>>,
        #[oai(name = "sortDirection")]
        sort_direction: Query<Option<String>>,
        page: Query<Option<String>>,
        #[oai(name = "perPage")]
        per_page: Query<Option<String>>,
    ) -> GetFilteredProductsResponse {
        let query = browse_query(
            q.0,
            cat.0,
            brand.0,
            sort_by.0,
            sort_direction.0,
            page.0,
            per_page.0,
        );
        let criteria = query.criteria();
        let params = GetFilteredProductsParams {
            criteria: criteria.clone(),
            page: query.page_request(&self.config),
        };

        match self.get_filtered_products_use_case.execute(params).await {
            Ok(page) => {
                let links = page_links(&criteria, &page, &self.config);
                GetFilteredProductsResponse::Ok(Json(ProductPageResponse::new(
                    page, &criteria, links,
                )))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetFilteredProductsResponse::ServiceUnavailable(json),
                    504 => GetFilteredProductsResponse::GatewayTimeout(json),
                    _ => GetFilteredProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Count products
    ///
    /// Returns how many products match the given filters, and whether any
    /// filter is active. Paging parameters are ignored.
    #[oai(path = "/products/stats", method = "get", tag = "ApiTags::Catalog")]
    async fn get_filter_stats(
        &self,
        q: Query<Option<String>>,
        cat: Query<Vec<String>>,
        brand: Query<Vec<String>>,
        #[oai(name = "sortBy")] sort_by: Query<Option<String>>,
        #[oai(name = "sortDirection")] sort_direction: Query<Option<String>>,
    ) -> GetFilterStatsResponse {
        let query = browse_query(
            q.0,
            cat.0,
            brand.0,
            sort_by.0,
            sort_direction.0,
            None,
            None,
        );

        match self.get_filter_stats_use_case.execute(query.criteria()).await {
            Ok(stats) => GetFilterStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetFilterStatsResponse::ServiceUnavailable(json),
                    504 => GetFilterStatsResponse::GatewayTimeout(json),
                    _ => GetFilterStatsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product with its brand and category.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match id.0.trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                return GetProductByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "product.invalid_id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(listing) => GetProductByIdResponse::Ok(Json(ProductResponse::from(listing))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    503 => GetProductByIdResponse::ServiceUnavailable(json),
                    504 => GetProductByIdResponse::GatewayTimeout(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List filter options
    ///
    /// Returns every brand and every category, each ordered by name.
    #[oai(path = "/filter-options", method = "get", tag = "ApiTags::Catalog")]
    async fn get_filter_options(&self) -> GetFilterOptionsResponse {
        match self.get_filter_options_use_case.execute().await {
            Ok(options) => GetFilterOptionsResponse::Ok(Json(options.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetFilterOptionsResponse::ServiceUnavailable(json),
                    504 => GetFilterOptionsResponse::GatewayTimeout(json),
                    _ => GetFilterOptionsResponse::InternalError(json),
                }
            }
        }
    }
}

fn browse_query(
    q: Option<String>,
    cat: Vec<String>,
    brand: Vec<String>,
    sort_by: Option<String>,
    sort_direction: Option<String>,
    page: Option<String>,
    per_page: Option<String>,
) -> BrowseQuery {
    let number = |value: Option<String>| value.and_then(|v| v.trim().parse::<i64>().ok());
    BrowseQuery {
        q,
        cat,
        brand,
        sort_by,
        sort_direction,
        page: number(page),
        per_page: number(per_page),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFilteredProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFilterStatsResponse {
    #[oai(status = 200)]
    Ok(Json<FilterStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFilterOptionsResponse {
    #[oai(status = 200)]
    Ok(Json<FilterOptionsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
