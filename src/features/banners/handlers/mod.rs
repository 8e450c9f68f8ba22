pub mod banner_handler;

pub use banner_handler::{
    __path_create_banner, __path_delete_banner, __path_get_banner, __path_list_banners,
    __path_list_public_banners, __path_reorder_banners, __path_update_banner, create_banner,
    delete_banner, get_banner, list_banners, list_public_banners, reorder_banners, update_banner,
};
