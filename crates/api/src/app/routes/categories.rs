use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use storefront_catalog::CategoryDto;

use crate::app::errors;
use crate::app::routes::products;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:category_id", get(get_category))
        .route("/:category_id/products", get(products::list_products))
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CategoryDto>,
) -> axum::response::Response {
    match services.categories.create_category(&body) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.categories.list_categories() {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "content": items }))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category_id): Path<String>,
) -> axum::response::Response {
    let category_id = match errors::parse_category_id(&category_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.categories.get_category(category_id) {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
