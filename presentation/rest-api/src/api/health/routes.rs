use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the catalog database answers, "degraded" otherwise
    pub status: String,
    /// Whether the catalog database answered a ping
    pub database: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(poem_openapi::ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Degraded(Json<HealthCheckResponse>),
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports whether the service is up and can reach its database.
    /// This endpoint is public and does not require authentication.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();
        let body = HealthCheckResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        if database {
            HealthResponse::Ok(Json(body))
        } else {
            tracing::warn!("health check could not reach the database");
            HealthResponse::Degraded(Json(body))
        }
    }
}
