use super::filter::FilterCriteria;
use super::value_objects::{SortField, SortState};

/// State behind a catalog page: what the user typed, ticked and clicked.
///
/// Any change to the filters or the ordering sends the user back to the
/// first page, since the old page number refers to a different result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    search: String,
    selected_categories: Vec<i64>,
    selected_brands: Vec<i64>,
    sort: SortState,
    page: u32,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_categories: Vec::new(),
            selected_brands: Vec::new(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    /// Restores a state, e.g. from URL parameters.
    pub fn restore(criteria: &FilterCriteria, page: u32) -> Self {
        Self {
            search: criteria.search.clone().unwrap_or_default(),
            selected_categories: criteria.category_ids.clone(),
            selected_brands: criteria.brand_ids.clone(),
            sort: criteria.sort(),
            page: page.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_categories(&self) -> &[i64] {
        &self.selected_categories
    }

    pub fn selected_brands(&self) -> &[i64] {
        &self.selected_brands
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.reset_page();
    }

    pub fn set_categories(&mut self, ids: Vec<i64>) {
        self.selected_categories = ids;
        self.reset_page();
    }

    pub fn set_brands(&mut self, ids: Vec<i64>) {
        self.selected_brands = ids;
        self.reset_page();
    }

    pub fn request_sort(&mut self, field: SortField) {
        self.sort.request_sort(field);
        self.reset_page();
    }

    /// Drops search, categories and brands. Ordering is kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.selected_categories.clear();
        self.selected_brands.clear();
        self.reset_page();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            Some(self.search.clone()),
            self.selected_categories.clone(),
            self.selected_brands.clone(),
            self.sort,
        )
    }

    fn reset_page(&mut self) {
        self.page = 1;
    }
}
