use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::colors::handlers;
use crate::features::colors::services::ColorService;

/// Create routes for the colors feature
pub fn routes(service: Arc<ColorService>) -> Router {
    Router::new()
        .route(
            "/api/v1/color",
            get(handlers::list_colors).post(handlers::create_color),
        )
        .route("/api/v1/color/reorder", patch(handlers::reorder_colors))
        .route(
            "/api/v1/color/{id}",
            get(handlers::get_color)
                .patch(handlers::update_color)
                .delete(handlers::delete_color),
        )
        .route("/api/v1/public/color", get(handlers::list_public_colors))
        .with_state(service)
}
