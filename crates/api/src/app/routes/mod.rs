use axum::Router;

pub mod categories;
pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/api/public/categories", categories::router())
        .nest("/api/admin/categories", products::admin_router())
}
