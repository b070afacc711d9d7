use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::catalog::filter::FilterCriteria;
use business::domain::catalog::model::{
    Brand, Category, FilterOptions, FilterStats, ProductListing,
};
use business::domain::catalog::page::Page;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
            slug: brand.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Decimal price with two places, e.g. "999.00"
    pub price: String,
    pub price_cents: i64,
    pub stock: u32,
    pub in_stock: bool,
    pub brand: BrandResponse,
    pub category: CategoryResponse,
}

impl From<ProductListing> for ProductResponse {
    fn from(listing: ProductListing) -> Self {
        let ProductListing {
            product,
            brand,
            category,
        } = listing;
        Self {
            in_stock: product.in_stock(),
            price: product.price.to_string(),
            price_cents: product.price.cents(),
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            stock: product.stock,
            brand: brand.into(),
            category: category.into(),
        }
    }
}

/// Filters and ordering the listing was computed with
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AppliedFiltersResponse {
    pub search: Option<String>,
    pub categories: Vec<i64>,
    pub brands: Vec<i64>,
    #[oai(rename = "sortBy")]
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[oai(rename = "sortDirection")]
    #[serde(rename = "sortDirection")]
    pub sort_direction: String,
}

impl From<&FilterCriteria> for AppliedFiltersResponse {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            search: criteria.search.clone(),
            categories: criteria.category_ids.clone(),
            brands: criteria.brand_ids.clone(),
            sort_by: criteria.sort_field.to_string(),
            sort_direction: criteria.sort_direction.to_string(),
        }
    }
}

/// Relative URLs that reproduce a neighbouring browse state
#[derive(Debug, Clone, Default, Serialize, Deserialize, Object)]
pub struct PageLinksResponse {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub clear_filters: String,
    pub sort_by_name: String,
    pub sort_by_price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub last_page: u32,
    /// 1-based position of the first item shown, absent on an empty page
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub has_active_filters: bool,
    pub filters: AppliedFiltersResponse,
    pub links: PageLinksResponse,
}

impl ProductPageResponse {
    pub fn new(
        page: Page<ProductListing>,
        criteria: &FilterCriteria,
        links: PageLinksResponse,
    ) -> Self {
        Self {
            last_page: page.last_page(),
            from: page.first_item(),
            to: page.last_item(),
            total: page.total,
            per_page: page.per_page,
            current_page: page.current_page,
            items: page.items.into_iter().map(Into::into).collect(),
            has_active_filters: criteria.has_active_filters(),
            filters: criteria.into(),
            links,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FilterStatsResponse {
    pub total: u64,
    pub has_active_filters: bool,
}

impl From<FilterStats> for FilterStatsResponse {
    fn from(stats: FilterStats) -> Self {
        Self {
            total: stats.total,
            has_active_filters: stats.has_active_filters,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FilterOptionsResponse {
    pub brands: Vec<BrandResponse>,
    pub categories: Vec<CategoryResponse>,
}

impl From<FilterOptions> for FilterOptionsResponse {
    fn from(options: FilterOptions) -> Self {
        Self {
            brands: options.brands.into_iter().map(Into::into).collect(),
            categories: options.categories.into_iter().map(Into::into).collect(),
        }
    }
}
