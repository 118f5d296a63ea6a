use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::{CategoryId, DomainError};
use storefront_infra::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match &err {
        CatalogError::Domain(DomainError::NotFound { .. }) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        CatalogError::Domain(DomainError::Validation(_)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        CatalogError::Domain(DomainError::InvalidId(_)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
        }
        CatalogError::Repository(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_category_id(s: &str) -> Result<CategoryId, axum::response::Response> {
    s.parse::<CategoryId>()
        .map_err(|e| json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}
