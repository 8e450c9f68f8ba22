mod category_service;

pub use category_service::{CategoryService, CATEGORY_PUBLIC_KEY};
