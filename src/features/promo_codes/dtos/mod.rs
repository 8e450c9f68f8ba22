mod promo_code_dto;

pub use promo_code_dto::*;
