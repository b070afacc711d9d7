use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "TimeoutError",
                "catalog.timeout",
            ),
            CatalogError::Repository(RepositoryError::Unavailable) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UnavailableError",
                "repository.unavailable",
            ),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = CatalogError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "catalog.not_found");
    }

    #[test]
    fn should_map_timeout_to_504() {
        let (status, _) = CatalogError::Timeout.into_error_response();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn should_map_unavailable_store_to_503() {
        let (status, json) =
            CatalogError::Repository(RepositoryError::Unavailable).into_error_response();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "UnavailableError");
    }

    #[test]
    fn should_map_other_repository_failures_to_500() {
        let (status, _) =
            CatalogError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
