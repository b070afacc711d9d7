use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::catalog::model::{Brand, Category, Product, ProductListing};
use business::domain::catalog::value_objects::Price;
use business::domain::errors::RepositoryError;

/// One row of the product/brand/category join.
#[derive(Debug, FromRow)]
pub struct ProductListingEntity {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub brand_id: i64,
    pub category_id: i64,
    pub brand_name: String,
    pub brand_slug: String,
    pub category_name: String,
    pub category_slug: String,
}

impl ProductListingEntity {
    pub fn into_domain(self) -> Result<ProductListing, RepositoryError> {
        let price = price_from_decimal(&self.price).ok_or_else(|| {
            tracing::error!(product_id = self.id, price = %self.price, "price out of range");
            RepositoryError::DatabaseError
        })?;
        let stock = u32::try_from(self.stock).map_err(|_| {
            tracing::error!(product_id = self.id, stock = self.stock, "negative stock");
            RepositoryError::DatabaseError
        })?;

        Ok(ProductListing {
            product: Product {
                id: self.id,
                name: self.name,
                slug: self.slug,
                description: self.description,
                price,
                stock,
                brand_id: self.brand_id,
                category_id: self.category_id,
            },
            brand: Brand {
                id: self.brand_id,
                name: self.brand_name,
                slug: self.brand_slug,
            },
            category: Category {
                id: self.category_id,
                name: self.category_name,
                slug: self.category_slug,
            },
        })
    }
}

/// NUMERIC(10,2) to cents, rounding half away from zero past the second decimal.
pub(crate) fn price_from_decimal(value: &BigDecimal) -> Option<Price> {
    (value * &BigDecimal::from(100_i64))
        .round(0)
        .to_i64()
        .map(Price::from_cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(price: &str, stock: i32) -> ProductListingEntity {
        ProductListingEntity {
            id: 1,
            name: "iPhone 15".to_string(),
            slug: "iphone-15".to_string(),
            description: Some("Phone".to_string()),
            price: BigDecimal::from_str(price).unwrap(),
            stock,
            brand_id: 2,
            category_id: 3,
            brand_name: "Apple".to_string(),
            brand_slug: "apple".to_string(),
            category_name: "Smartphones".to_string(),
            category_slug: "smartphones".to_string(),
        }
    }

    #[test]
    fn should_convert_decimal_price_to_cents() {
        let decimal = BigDecimal::from_str("999.99").unwrap();
        assert_eq!(price_from_decimal(&decimal), Some(Price::from_cents(99_999)));

        let whole = BigDecimal::from_str("10").unwrap();
        assert_eq!(price_from_decimal(&whole), Some(Price::from_cents(1_000)));
    }

    #[test]
    fn should_attach_brand_and_category_when_mapping_row() {
        let listing = entity("129.50", 4).into_domain().unwrap();

        assert_eq!(listing.product.price, Price::from_cents(12_950));
        assert_eq!(listing.product.stock, 4);
        assert_eq!(listing.brand.id, listing.product.brand_id);
        assert_eq!(listing.brand.name, "Apple");
        assert_eq!(listing.category.id, listing.product.category_id);
        assert_eq!(listing.category.slug, "smartphones");
    }

    #[test]
    fn should_reject_negative_stock() {
        assert_eq!(
            entity("1.00", -1).into_domain().unwrap_err(),
            RepositoryError::DatabaseError
        );
    }
}
