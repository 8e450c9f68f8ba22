mod color_service;

pub use color_service::ColorService;
