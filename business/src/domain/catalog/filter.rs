use serde_json::{Map, Value};

use super::value_objects::{SortDirection, SortField, SortState};

pub const SEARCH_KEY: &str = "search";
pub const CATEGORIES_KEY: &str = "categories";
pub const BRANDS_KEY: &str = "brands";
pub const SORT_BY_KEY: &str = "sortBy";
pub const SORT_DIRECTION_KEY: &str = "sortDirection";

/// Search, filter and sort parameters of one catalog query.
///
/// Built fresh for every request and never mutated afterwards. NUL bytes are
/// stripped from the search text since the store cannot hold them. An empty
/// `category_ids` or `brand_ids` list means that dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub category_ids: Vec<i64>,
    pub brand_ids: Vec<i64>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl FilterCriteria {
    pub fn new(
        search: Option<String>,
        category_ids: Vec<i64>,
        brand_ids: Vec<i64>,
        sort: SortState,
    ) -> Self {
        Self {
            search: search
                .map(|s| s.replace('\0', ""))
                .filter(|s| !s.is_empty()),
            category_ids: dedup(category_ids),
            brand_ids: dedup(brand_ids),
            sort_field: sort.field,
            sort_direction: sort.direction,
        }
    }

    /// Reads a flat mapping keyed by `search`, `categories`, `brands`,
    /// `sortBy` and `sortDirection`.
    ///
    /// Never fails: anything missing or malformed falls back to its default.
    /// Id lists accept a single scalar or an array; entries that are not a
    /// positive integer (or a string holding one) are dropped.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let search = match raw.get(SEARCH_KEY) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let sort_field = raw
            .get(SORT_BY_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let sort_direction = raw
            .get(SORT_DIRECTION_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self::new(
            search,
            id_list(raw.get(CATEGORIES_KEY)),
            id_list(raw.get(BRANDS_KEY)),
            SortState::new(sort_field, sort_direction),
        )
    }

    /// Inverse of [`FilterCriteria::from_raw`]. Keys are always present;
    /// an absent search is written as `null`.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        raw.insert(
            SEARCH_KEY.to_string(),
            self.search.clone().map(Value::String).unwrap_or(Value::Null),
        );
        raw.insert(CATEGORIES_KEY.to_string(), ids_value(&self.category_ids));
        raw.insert(BRANDS_KEY.to_string(), ids_value(&self.brand_ids));
        raw.insert(
            SORT_BY_KEY.to_string(),
            Value::String(self.sort_field.to_string()),
        );
        raw.insert(
            SORT_DIRECTION_KEY.to_string(),
            Value::String(self.sort_direction.to_string()),
        );
        raw
    }

    /// True when search, categories or brands constrain the result. Sorting does not count.
    pub fn has_active_filters(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || !self.category_ids.is_empty()
            || !self.brand_ids.is_empty()
    }

    pub fn sort(&self) -> SortState {
        SortState::new(self.sort_field, self.sort_direction)
    }

    /// Same ordering, no filters.
    pub fn cleared(&self) -> Self {
        Self {
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            ..Self::default()
        }
    }
}

fn id_list(value: Option<&Value>) -> Vec<i64> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(parse_id).collect(),
        Some(scalar) => parse_id(scalar).into_iter().collect(),
        None => Vec::new(),
    }
}

fn parse_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}

fn ids_value(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(*id)).collect())
}

fn dedup(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
