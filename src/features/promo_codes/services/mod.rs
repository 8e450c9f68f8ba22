mod promo_code_service;

pub use promo_code_service::PromoCodeService;
