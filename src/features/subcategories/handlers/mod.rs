pub mod subcategory_handler;

pub use subcategory_handler::{
    __path_create_subcategory, __path_delete_subcategory, __path_get_subcategory,
    __path_list_public_subcategories, __path_list_subcategories, __path_reorder_subcategories,
    __path_update_subcategory, create_subcategory, delete_subcategory, get_subcategory,
    list_public_subcategories, list_subcategories, reorder_subcategories, update_subcategory,
};
