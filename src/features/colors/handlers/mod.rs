pub mod color_handler;

pub use color_handler::{
    __path_create_color, __path_delete_color, __path_get_color, __path_list_colors,
    __path_list_public_colors, __path_reorder_colors, __path_update_color, create_color,
    delete_color, get_color, list_colors, list_public_colors, reorder_colors, update_color,
};
