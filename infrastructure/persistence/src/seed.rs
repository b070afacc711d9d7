use bigdecimal::BigDecimal;
use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::str::FromStr;

use business::domain::catalog::value_objects::Price;

use crate::db::DatabaseError;

pub const DEMO_BRANDS: [&str; 15] = [
    "Apple", "Samsung", "Sony", "LG", "Dell", "HP", "Lenovo", "Asus", "Microsoft", "Google",
    "Amazon", "Nike", "Adidas", "Puma", "Canon",
];

pub const DEMO_CATEGORIES: [&str; 15] = [
    "Electronics",
    "Smartphones",
    "Laptops",
    "Tablets",
    "Cameras",
    "Audio",
    "Wearables",
    "Gaming",
    "Sports",
    "Clothing",
    "Footwear",
    "Accessories",
    "Home & Garden",
    "Books",
    "Toys",
];

pub const DEMO_PRODUCT_COUNT: usize = 100;

const ADJECTIVES: [&str; 12] = [
    "Ultra", "Compact", "Smart", "Classic", "Wireless", "Pro", "Lite", "Rugged", "Premium",
    "Eco", "Slim", "Turbo",
];
const NOUNS: [&str; 12] = [
    "Speaker", "Watch", "Camera", "Headphones", "Monitor", "Keyboard", "Backpack", "Sneakers",
    "Tablet", "Charger", "Console", "Lamp",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub brands: usize,
    pub categories: usize,
    pub products: usize,
}

struct DemoProduct {
    name: String,
    slug: String,
    description: String,
    price: Price,
    stock: i32,
    brand_index: usize,
    category_index: usize,
}

/// Lower-case ASCII slug: runs of anything that is not a letter or digit become one `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Fills an empty catalog with demo brands, categories and random products.
/// Does nothing when products already exist.
pub async fn seed_demo_catalog(pool: &PgPool) -> Result<Option<SeedReport>, DatabaseError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .map_err(seed_error)?;
    if existing > 0 {
        tracing::info!(existing, "catalog already populated, skipping demo seed");
        return Ok(None);
    }

    let products = demo_products(DEMO_PRODUCT_COUNT);
    let mut tx = pool.begin().await.map_err(seed_error)?;
    let brand_ids = insert_named(&mut tx, "brands", &DEMO_BRANDS).await?;
    let category_ids = insert_named(&mut tx, "categories", &DEMO_CATEGORIES).await?;

    let mut insert: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO products (name, slug, description, price, stock, brand_id, category_id) ",
    );
    let mut rows = Vec::with_capacity(products.len());
    for product in products {
        let price = BigDecimal::from_str(&product.price.to_string())
            .map_err(|_| DatabaseError::SeedError)?;
        rows.push((product, price));
    }
    insert.push_values(rows, |mut row, (product, price)| {
        row.push_bind(product.name)
            .push_bind(product.slug)
            .push_bind(product.description)
            .push_bind(price)
            .push_bind(product.stock)
            .push_bind(brand_ids[product.brand_index])
            .push_bind(category_ids[product.category_index]);
    });
    insert.build().execute(&mut *tx).await.map_err(seed_error)?;
    tx.commit().await.map_err(seed_error)?;

    let report = SeedReport {
        brands: brand_ids.len(),
        categories: category_ids.len(),
        products: DEMO_PRODUCT_COUNT,
    };
    tracing::info!(?report, "seeded demo catalog");
    Ok(Some(report))
}

async fn insert_named(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    names: &[&str],
) -> Result<Vec<i64>, DatabaseError> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let id: i64 = sqlx::query_scalar(&format!(
            "INSERT INTO {table} (name, slug) VALUES ($1, $2) RETURNING id"
        ))
        .bind(*name)
        .bind(slugify(name))
        .fetch_one(&mut **tx)
        .await
        .map_err(seed_error)?;
        ids.push(id);
    }
    Ok(ids)
}

/// Random products with unique names, prices between 10.00 and 1000.00 and stock up to 100.
fn demo_products(count: usize) -> Vec<DemoProduct> {
    let mut rng = rand::rng();
    (0..count)
        .map(|n| {
            let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Classic");
            let noun = NOUNS.choose(&mut rng).copied().unwrap_or("Gadget");
            let name = format!("{adjective} {noun} {}", n + 1);
            DemoProduct {
                slug: slugify(&name),
                description: format!(
                    "The {} {} for everyday use.",
                    adjective.to_lowercase(),
                    noun.to_lowercase()
                ),
                price: Price::from_cents(rng.random_range(1_000..=100_000)),
                stock: rng.random_range(0..=100),
                brand_index: rng.random_range(0..DEMO_BRANDS.len()),
                category_index: rng.random_range(0..DEMO_CATEGORIES.len()),
                name,
            }
        })
        .collect()
}

fn seed_error(err: sqlx::Error) -> DatabaseError {
    tracing::error!(error = %err, "demo seed failed");
    DatabaseError::SeedError
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_slugify_names() {
        assert_eq!(slugify("Home & Garden"), "home-garden");
        assert_eq!(slugify("  Ultra Watch 12 "), "ultra-watch-12");
        assert_eq!(slugify("LG"), "lg");
    }

    #[test]
    fn should_generate_products_within_demo_ranges() {
        let products = demo_products(DEMO_PRODUCT_COUNT);

        assert_eq!(products.len(), DEMO_PRODUCT_COUNT);
        for product in &products {
            assert!((1_000..=100_000).contains(&product.price.cents()));
            assert!((0..=100).contains(&product.stock));
            assert!(product.brand_index < DEMO_BRANDS.len());
            assert!(product.category_index < DEMO_CATEGORIES.len());
        }
    }

    #[test]
    fn should_generate_unique_slugs() {
        let products = demo_products(DEMO_PRODUCT_COUNT);
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), products.len());
    }
}
