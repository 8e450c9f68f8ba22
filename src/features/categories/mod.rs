//! Product categories.
//!
//! Categories carry an optional icon and a featured flag. The public read
//! returns active categories with their active subcategories nested, cached
//! under a single key that subcategory writes also invalidate.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/category` | Create category (JSON or multipart with `icon`) |
//! | GET | `/api/v1/category` | List categories (admin) |
//! | PATCH | `/api/v1/category/reorder` | Rewrite display order |
//! | GET | `/api/v1/category/{id}` | Get category |
//! | PATCH | `/api/v1/category/{id}` | Partial update |
//! | DELETE | `/api/v1/category/{id}` | Delete category and its icon |
//! | GET | `/api/v1/public/category` | Active category tree |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CategoryService, CATEGORY_PUBLIC_KEY};
