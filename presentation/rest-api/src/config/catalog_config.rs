use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::application::catalog::deadline::DEFAULT_QUERY_TIMEOUT;
use business::domain::catalog::page::DEFAULT_PER_PAGE;

/// Paging and timeout settings for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub per_page: u32,
    pub max_per_page: u32,
    pub query_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            max_per_page: 100,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_PER_PAGE: Default page size (default: 15)
    /// - CATALOG_MAX_PER_PAGE: Largest page size a client may request (default: 100)
    /// - CATALOG_QUERY_TIMEOUT_MS: Deadline for one storage round trip (default: 5000)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_PER_PAGE").ok(),
            env::var("CATALOG_MAX_PER_PAGE").ok(),
            env::var("CATALOG_QUERY_TIMEOUT_MS").ok(),
        )
    }

    fn from_values(
        per_page: Option<String>,
        max_per_page: Option<String>,
        timeout_ms: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        let max_per_page = parse_or(max_per_page, defaults.max_per_page).max(1);
        let per_page = parse_or(per_page, defaults.per_page).clamp(1, max_per_page);
        let query_timeout = timeout_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.query_timeout);

        Self {
            per_page,
            max_per_page,
            query_timeout,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
