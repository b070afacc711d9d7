use super::value_objects::Price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Read-only projection of a catalog product. The catalog never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock: u32,
    pub brand_id: i64,
    pub category_id: i64,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A product with its brand and category already attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub product: Product,
    pub brand: Brand,
    pub category: Category,
}

/// Everything a catalog page offers as filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
}

/// Result size under the current filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: u64,
    pub has_active_filters: bool,
}
