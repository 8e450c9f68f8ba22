//! Banner routes

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::banners::handlers;
use crate::features::banners::services::BannerService;

pub fn routes(service: Arc<BannerService>) -> Router {
    Router::new()
        .route(
            "/api/v1/ecommerce-banner",
            get(handlers::list_banners).post(handlers::create_banner),
        )
        .route(
            "/api/v1/ecommerce-banner/reorder",
            patch(handlers::reorder_banners),
        )
        .route(
            "/api/v1/ecommerce-banner/{id}",
            get(handlers::get_banner)
                .patch(handlers::update_banner)
                .delete(handlers::delete_banner),
        )
        .route(
            "/api/v1/public/ecommerce-banner",
            get(handlers::list_public_banners),
        )
        .with_state(service)
}
