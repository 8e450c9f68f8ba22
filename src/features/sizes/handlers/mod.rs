pub mod size_handler;

pub use size_handler::{
    __path_create_size, __path_delete_size, __path_get_size, __path_list_sizes,
    __path_list_public_sizes, __path_reorder_sizes, __path_update_size, create_size,
    delete_size, get_size, list_sizes, list_public_sizes, reorder_sizes, update_size,
};
