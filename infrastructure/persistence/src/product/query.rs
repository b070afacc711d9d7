use sqlx::{Postgres, QueryBuilder};
use strum_macros::AsRefStr;

use business::domain::catalog::filter::FilterCriteria;
use business::domain::catalog::page::PageRequest;
use business::domain::catalog::value_objects::{SortDirection, SortField};

const SELECT_LISTING: &str = "SELECT p.id, p.name, p.slug, p.description, p.price, p.stock, \
     p.brand_id, p.category_id, \
     b.name AS brand_name, b.slug AS brand_slug, \
     c.name AS category_name, c.slug AS category_slug \
     FROM products p \
     INNER JOIN brands b ON b.id = p.brand_id \
     INNER JOIN categories c ON c.id = p.category_id";

const SELECT_COUNT: &str = "SELECT COUNT(*) FROM products p";

#[derive(Debug, Clone, Copy, AsRefStr)]
enum SortColumn {
    #[strum(serialize = "p.name")]
    Name,
    #[strum(serialize = "p.price")]
    Price,
}

impl From<SortField> for SortColumn {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortColumn::Name,
            SortField::Price => SortColumn::Price,
        }
    }
}

#[derive(Debug, Clone, Copy, AsRefStr)]
enum SortOrder {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => SortOrder::Asc,
            SortDirection::Desc => SortOrder::Desc,
        }
    }
}

/// Page of products with brand and category joined in.
pub fn listing_query(criteria: &FilterCriteria, page: PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_LISTING);
    push_filters(&mut query, criteria);
    push_order(&mut query, criteria);
    query
        .push(" LIMIT ")
        .push_bind(i64::from(page.per_page))
        .push(" OFFSET ")
        .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
    query
}

pub fn by_id_query(id: i64) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_LISTING);
    query.push(" WHERE p.id = ").push_bind(id);
    query
}

/// Number of rows the same filters match.
pub fn count_query(criteria: &FilterCriteria) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_COUNT);
    push_filters(&mut query, criteria);
    query
}

/// ANDs one predicate per non-empty filter dimension.
fn push_filters(query: &mut QueryBuilder<'static, Postgres>, criteria: &FilterCriteria) {
    let mut keyword = " WHERE ";

    if let Some(search) = criteria.search.as_deref().filter(|s| !s.is_empty()) {
        query
            .push(keyword)
            .push("p.name ILIKE ")
            .push_bind(contains_pattern(search));
        keyword = " AND ";
    }

    if !criteria.category_ids.is_empty() {
        query
            .push(keyword)
            .push("p.category_id = ANY(")
            .push_bind(criteria.category_ids.clone())
            .push(")");
        keyword = " AND ";
    }

    if !criteria.brand_ids.is_empty() {
        query
            .push(keyword)
            .push("p.brand_id = ANY(")
            .push_bind(criteria.brand_ids.clone())
            .push(")");
    }
}

fn push_order(query: &mut QueryBuilder<'static, Postgres>, criteria: &FilterCriteria) {
    let column = SortColumn::from(criteria.sort_field);
    let order = SortOrder::from(criteria.sort_direction);
    query
        .push(" ORDER BY ")
        .push(column.as_ref())
        .push(" ")
        .push(order.as_ref())
        .push(", p.id ASC");
}

/// `%term%` with LIKE wildcards in the term escaped. Backslash is the
/// default LIKE escape character in Postgres.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::value_objects::SortState;

    const FROM_JOINED: &str = "FROM products p \
         INNER JOIN brands b ON b.id = p.brand_id \
         INNER JOIN categories c ON c.id = p.category_id";

    #[test]
    fn should_not_constrain_when_no_filters_are_active() {
        let query = listing_query(&FilterCriteria::default(), PageRequest::default());

        assert!(query.sql().contains(FROM_JOINED));
        assert!(!query.sql().contains("WHERE"));
        assert!(
            query
                .sql()
                .ends_with(" ORDER BY p.name ASC, p.id ASC LIMIT $1 OFFSET $2")
        );
    }

    #[test]
    fn should_and_every_active_dimension() {
        let criteria = FilterCriteria::new(
            Some("iPhone".to_string()),
            vec![1, 2],
            vec![3],
            SortState::new(SortField::Price, SortDirection::Desc),
        );

        let query = listing_query(&criteria, PageRequest::new(2, 15));

        assert!(query.sql().ends_with(
            " WHERE p.name ILIKE $1 AND p.category_id = ANY($2) AND p.brand_id = ANY($3) \
             ORDER BY p.price DESC, p.id ASC LIMIT $4 OFFSET $5"
        ));
    }

    #[test]
    fn should_start_with_where_when_only_brand_is_filtered() {
        let criteria = FilterCriteria::new(None, vec![], vec![7], SortState::default());

        let query = count_query(&criteria);

        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM products p WHERE p.brand_id = ANY($1)"
        );
    }

    #[test]
    fn should_count_with_same_predicates_as_listing() {
        let criteria = FilterCriteria::new(
            Some("book".to_string()),
            vec![4],
            vec![],
            SortState::default(),
        );

        let count = count_query(&criteria);
        let listing = listing_query(&criteria, PageRequest::default());

        let predicates = " WHERE p.name ILIKE $1 AND p.category_id = ANY($2)";
        assert!(count.sql().ends_with(predicates));
        assert!(listing.sql().contains(predicates));
        assert!(!count.sql().contains("ORDER BY"));
    }

    #[test]
    fn should_look_up_single_product_with_relations() {
        let query = by_id_query(9);

        assert!(query.sql().contains(FROM_JOINED));
        assert!(query.sql().ends_with(" WHERE p.id = $1"));
    }

    #[test]
    fn should_wrap_search_term_for_substring_match() {
        assert_eq!(contains_pattern("iPhone"), "%iPhone%");
    }

    #[test]
    fn should_escape_like_wildcards_in_search_term() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
