//! Product sizes (S, M, XL, 42, ...) offered to vendors when listing variants.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/size` | Create size |
//! | GET | `/api/v1/size` | List sizes (admin) |
//! | PATCH | `/api/v1/size/reorder` | Rewrite display order |
//! | GET | `/api/v1/size/{id}` | Get size |
//! | PATCH | `/api/v1/size/{id}` | Partial update |
//! | DELETE | `/api/v1/size/{id}` | Delete size |
//! | GET | `/api/v1/public/size` | Active sizes |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SizeService;
