//! Storefront banners.
//!
//! Banners are placed in a fixed set of page positions and ordered manually
//! inside the collection. The public read is cached per position.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/ecommerce-banner` | Create banner (JSON or multipart with `bannerImage`) |
//! | GET | `/api/v1/ecommerce-banner` | List banners (admin) |
//! | PATCH | `/api/v1/ecommerce-banner/reorder` | Rewrite display order |
//! | GET | `/api/v1/ecommerce-banner/{id}` | Get banner |
//! | PATCH | `/api/v1/ecommerce-banner/{id}` | Partial update |
//! | DELETE | `/api/v1/ecommerce-banner/{id}` | Delete banner and its image |
//! | GET | `/api/v1/public/ecommerce-banner` | Active banners for a position |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BannerService;
