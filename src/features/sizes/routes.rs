use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::sizes::handlers;
use crate::features::sizes::services::SizeService;

/// Create routes for the sizes feature
pub fn routes(service: Arc<SizeService>) -> Router {
    Router::new()
        .route(
            "/api/v1/size",
            get(handlers::list_sizes).post(handlers::create_size),
        )
        .route("/api/v1/size/reorder", patch(handlers::reorder_sizes))
        .route(
            "/api/v1/size/{id}",
            get(handlers::get_size)
                .patch(handlers::update_size)
                .delete(handlers::delete_size),
        )
        .route("/api/v1/public/size", get(handlers::list_public_sizes))
        .with_state(service)
}
