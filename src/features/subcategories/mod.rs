//! Subcategories, each attached to an existing category.
//!
//! There is no separate public cache key: active subcategories are served
//! inside the category tree, so every write here invalidates it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/subcategory` | Create subcategory (JSON or multipart with `image`) |
//! | GET | `/api/v1/subcategory` | List subcategories (admin) |
//! | PATCH | `/api/v1/subcategory/reorder` | Rewrite display order |
//! | GET | `/api/v1/subcategory/{id}` | Get subcategory |
//! | PATCH | `/api/v1/subcategory/{id}` | Partial update |
//! | DELETE | `/api/v1/subcategory/{id}` | Delete subcategory and its image |
//! | GET | `/api/v1/public/subcategory` | Active subcategories, optionally of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SubcategoryService;
