use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::promo_codes::handlers;
use crate::features::promo_codes::services::PromoCodeService;

/// Create routes for the promo codes feature
pub fn routes(service: Arc<PromoCodeService>) -> Router {
    Router::new()
        .route(
            "/api/v1/promo-code",
            get(handlers::list_promo_codes).post(handlers::create_promo_code),
        )
        .route("/api/v1/promo-code/apply", post(handlers::apply_promo_code))
        .route(
            "/api/v1/promo-code/{id}",
            get(handlers::get_promo_code)
                .patch(handlers::update_promo_code)
                .delete(handlers::delete_promo_code),
        )
        .route(
            "/api/v1/public/promo-code",
            get(handlers::list_public_promo_codes),
        )
        .with_state(service)
}
