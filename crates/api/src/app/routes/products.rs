use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use storefront_catalog::ProductDto;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn admin_router() -> Router {
    Router::new().route("/:category_id/product", post(add_product))
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category_id): Path<String>,
    Json(body): Json<ProductDto>,
) -> axum::response::Response {
    let category_id = match errors::parse_category_id(&category_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.products.add_product(category_id, &body) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category_id): Path<String>,
) -> axum::response::Response {
    let category_id = match errors::parse_category_id(&category_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.products.products_by_category(category_id) {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "content": items }))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
