use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/v1/category",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/v1/category/reorder",
            patch(handlers::reorder_categories),
        )
        .route(
            "/api/v1/category/{id}",
            get(handlers::get_category)
                .patch(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/v1/public/category",
            get(handlers::list_public_categories),
        )
        .with_state(service)
}
