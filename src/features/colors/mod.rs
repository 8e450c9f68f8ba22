//! Product colors offered to vendors when listing variants.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/color` | Create color |
//! | GET | `/api/v1/color` | List colors (admin) |
//! | PATCH | `/api/v1/color/reorder` | Rewrite display order |
//! | GET | `/api/v1/color/{id}` | Get color |
//! | PATCH | `/api/v1/color/{id}` | Partial update |
//! | DELETE | `/api/v1/color/{id}` | Delete color |
//! | GET | `/api/v1/public/color` | Active colors |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ColorService;
