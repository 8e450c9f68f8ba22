pub mod slider_handler;

pub use slider_handler::{
    __path_create_slider, __path_delete_slider, __path_get_slider, __path_list_public_sliders,
    __path_list_sliders, __path_reorder_sliders, __path_update_slider, create_slider,
    delete_slider, get_slider, list_public_sliders, list_sliders, reorder_sliders, update_slider,
};
