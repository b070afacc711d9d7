use std::sync::Arc;

use async_trait::async_trait;

use business::domain::catalog::filter::FilterCriteria;
use business::domain::catalog::model::{Brand, Category, Product, ProductListing};
use business::domain::catalog::page::{Page, PageRequest};
use business::domain::catalog::repository::ProductRepository;
use business::domain::catalog::value_objects::{Price, SortDirection, SortField};
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn logger() -> Arc<dyn Logger> {
    Arc::new(SilentLogger)
}

/// Catalog held in memory, filtered the same way the SQL adapter filters:
/// case-insensitive substring search, OR within a dimension, AND across them,
/// ordered by the sort field then id. Names compare ignoring ASCII case, which
/// is how a locale collation such as en_US orders the fixture names; under
/// the C collation Postgres would put upper case first.
#[derive(Default)]
pub struct InMemoryCatalog {
    brands: Vec<Brand>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn add_brand(&mut self, name: &str) -> i64 {
        let id = self.brands.len() as i64 + 1;
        self.brands.push(Brand {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
        });
        id
    }

    pub fn add_category(&mut self, name: &str) -> i64 {
        let id = self.categories.len() as i64 + 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
        });
        id
    }

    pub fn add_product(&mut self, name: &str, price_cents: i64, brand_id: i64, category_id: i64) -> i64 {
        let id = self.products.len() as i64 + 1;
        self.products.push(Product {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            price: Price::from_cents(price_cents),
            stock: 10,
            brand_id,
            category_id,
        });
        id
    }

    fn matches(criteria: &FilterCriteria, product: &Product) -> bool {
        let search_ok = criteria.search.as_deref().is_none_or(|needle| {
            product.name.to_lowercase().contains(&needle.to_lowercase())
        });
        let category_ok = criteria.category_ids.is_empty()
            || criteria.category_ids.contains(&product.category_id);
        let brand_ok =
            criteria.brand_ids.is_empty() || criteria.brand_ids.contains(&product.brand_id);
        search_ok && category_ok && brand_ok
    }

    fn filtered(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        let mut rows: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| Self::matches(criteria, p))
            .collect();
        rows.sort_by(|a, b| {
            let primary = match criteria.sort_field {
                SortField::Name => name_order(&a.name, &b.name),
                SortField::Price => a.price.cmp(&b.price),
            };
            let primary = match criteria.sort_direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary.then(a.id.cmp(&b.id))
        });
        rows
    }

    fn attach(&self, product: &Product) -> Result<ProductListing, RepositoryError> {
        let brand = self
            .brands
            .iter()
            .find(|b| b.id == product.brand_id)
            .ok_or(RepositoryError::DatabaseError)?;
        let category = self
            .categories
            .iter()
            .find(|c| c.id == product.category_id)
            .ok_or(RepositoryError::DatabaseError)?;
        Ok(ProductListing {
            product: product.clone(),
            brand: brand.clone(),
            category: category.clone(),
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn get_filtered_products(
        &self,
        criteria: &FilterCriteria,
        page: PageRequest,
    ) -> Result<Page<ProductListing>, RepositoryError> {
        let rows = self.filtered(criteria);
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .map(|p| self.attach(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total, page))
    }

    async fn count_filtered_products(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<u64, RepositoryError> {
        Ok(self.filtered(criteria).len() as u64)
    }

    async fn get_by_id(&self, id: i64) -> Result<ProductListing, RepositoryError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        self.attach(product)
    }
}

/// Ids of the three-product fixture.
pub struct Fixture {
    pub catalog: Arc<InMemoryCatalog>,
    pub apple: i64,
    pub samsung: i64,
    pub smartphones: i64,
    pub laptops: i64,
}

pub fn three_products() -> Fixture {
    let mut catalog = InMemoryCatalog::default();
    let apple = catalog.add_brand("Apple");
    let samsung = catalog.add_brand("Samsung");
    let smartphones = catalog.add_category("Smartphones");
    let laptops = catalog.add_category("Laptops");

    catalog.add_product("iPhone 15", 99_900, apple, smartphones);
    catalog.add_product("MacBook Pro", 199_900, apple, laptops);
    catalog.add_product("Galaxy S24", 89_900, samsung, smartphones);

    Fixture {
        catalog: Arc::new(catalog),
        apple,
        samsung,
        smartphones,
        laptops,
    }
}

fn name_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_ascii_lowercase()
        .cmp(&b.to_ascii_lowercase())
        .then_with(|| a.cmp(b))
}
