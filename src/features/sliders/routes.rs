//! Slider routes

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::sliders::handlers;
use crate::features::sliders::services::SliderService;

pub fn routes(service: Arc<SliderService>) -> Router {
    Router::new()
        .route(
            "/api/v1/slider",
            get(handlers::list_sliders).post(handlers::create_slider),
        )
        .route("/api/v1/slider/reorder", patch(handlers::reorder_sliders))
        .route(
            "/api/v1/slider/{id}",
            get(handlers::get_slider)
                .patch(handlers::update_slider)
                .delete(handlers::delete_slider),
        )
        .route("/api/v1/public/slider", get(handlers::list_public_sliders))
        .with_state(service)
}
