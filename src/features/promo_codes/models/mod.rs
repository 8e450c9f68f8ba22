mod promo_code;

pub use promo_code::{DiscountType, PromoCode};
