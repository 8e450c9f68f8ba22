pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_delete_category, __path_get_category,
    __path_list_categories, __path_list_public_categories, __path_reorder_categories,
    __path_update_category, create_category, delete_category, get_category, list_categories,
    list_public_categories, reorder_categories, update_category,
};
