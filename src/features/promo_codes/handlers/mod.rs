pub mod promo_code_handler;

pub use promo_code_handler::{
    __path_apply_promo_code, __path_create_promo_code, __path_delete_promo_code,
    __path_get_promo_code, __path_list_promo_codes, __path_list_public_promo_codes,
    __path_update_promo_code, apply_promo_code, create_promo_code, delete_promo_code,
    get_promo_code, list_promo_codes, list_public_promo_codes, update_promo_code,
};
