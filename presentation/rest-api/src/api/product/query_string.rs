use serde_json::{Map, Value};
use url::form_urlencoded;

use business::domain::catalog::browse::BrowseState;
use business::domain::catalog::filter::{
    BRANDS_KEY, CATEGORIES_KEY, FilterCriteria, SEARCH_KEY, SORT_BY_KEY, SORT_DIRECTION_KEY,
};
use business::domain::catalog::page::{Page, PageRequest};
use business::domain::catalog::value_objects::SortField;

use crate::api::product::dto::PageLinksResponse;
use crate::config::catalog_config::CatalogConfig;

pub const PRODUCTS_PATH: &str = "/products";

const SEARCH_PARAM: &str = "q";
const CATEGORY_PARAM: &str = "cat";
const BRAND_PARAM: &str = "brand";
const PAGE_PARAM: &str = "page";
const PER_PAGE_PARAM: &str = "perPage";

/// Catalog browse state as it travels in the URL.
///
/// `q`, `cat` and `brand` are short aliases for the filter keys; `cat` and
/// `brand` repeat once per selected id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub cat: Vec<String>,
    pub brand: Vec<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl BrowseQuery {
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        if let Some(q) = &self.q {
            raw.insert(SEARCH_KEY.to_string(), Value::String(q.clone()));
        }
        raw.insert(CATEGORIES_KEY.to_string(), strings(&self.cat));
        raw.insert(BRANDS_KEY.to_string(), strings(&self.brand));
        if let Some(sort_by) = &self.sort_by {
            raw.insert(SORT_BY_KEY.to_string(), Value::String(sort_by.clone()));
        }
        if let Some(direction) = &self.sort_direction {
            raw.insert(
                SORT_DIRECTION_KEY.to_string(),
                Value::String(direction.clone()),
            );
        }
        raw
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(&self.to_raw())
    }

    /// Missing page size means the configured default; anything above the
    /// configured maximum is capped.
    pub fn page_request(&self, config: &CatalogConfig) -> PageRequest {
        let per_page = self
            .per_page
            .unwrap_or(i64::from(config.per_page))
            .min(i64::from(config.max_per_page));
        PageRequest::new(self.page.unwrap_or(1), per_page)
    }
}

fn strings(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

/// Relative `/products` URL for a browse state. Page 1 and the default page
/// size are left out.
pub fn browse_url(
    criteria: &FilterCriteria,
    page: u32,
    per_page: u32,
    config: &CatalogConfig,
) -> String {
    let raw = criteria.to_raw();
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(search) = raw.get(SEARCH_KEY).and_then(Value::as_str) {
        query.append_pair(SEARCH_PARAM, search);
    }
    for (key, param) in [(CATEGORIES_KEY, CATEGORY_PARAM), (BRANDS_KEY, BRAND_PARAM)] {
        if let Some(Value::Array(ids)) = raw.get(key) {
            for id in ids {
                query.append_pair(param, &id.to_string());
            }
        }
    }
    for key in [SORT_BY_KEY, SORT_DIRECTION_KEY] {
        if let Some(value) = raw.get(key).and_then(Value::as_str) {
            query.append_pair(key, value);
        }
    }
    if page > 1 {
        query.append_pair(PAGE_PARAM, &page.to_string());
    }
    if per_page != config.per_page {
        query.append_pair(PER_PAGE_PARAM, &per_page.to_string());
    }

    format!("{PRODUCTS_PATH}?{}", query.finish())
}

/// Links for the paginator, the sort buttons and "clear all filters".
pub fn page_links<T>(
    criteria: &FilterCriteria,
    page: &Page<T>,
    config: &CatalogConfig,
) -> PageLinksResponse {
    let current = BrowseState::restore(criteria, page.current_page);
    let link = |change: fn(&mut BrowseState, u32)| {
        let mut state = current.clone();
        change(&mut state, page.current_page);
        browse_url(&state.criteria(), state.page(), page.per_page, config)
    };

    PageLinksResponse {
        prev: (page.current_page > 1).then(|| link(|state, current| state.go_to_page(current - 1))),
        next: page
            .has_more_pages()
            .then(|| link(|state, current| state.go_to_page(current + 1))),
        clear_filters: link(|state, _| state.clear_filters()),
        sort_by_name: link(|state, _| state.request_sort(SortField::Name)),
        sort_by_price: link(|state, _| state.request_sort(SortField::Price)),
    }
}
