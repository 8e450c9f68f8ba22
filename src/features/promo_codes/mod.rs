//! Promo codes redeemable at checkout.
//!
//! A code is live while it is `active` and the current time falls inside
//! `[startDate, endDate]`. Codes are stored upper-cased and matched exactly.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/promo-code` | Create promo code (JSON or multipart with `icon`) |
//! | GET | `/api/v1/promo-code` | List promo codes (admin, newest first) |
//! | POST | `/api/v1/promo-code/apply` | Compute the discount for an order amount |
//! | GET | `/api/v1/promo-code/{id}` | Get promo code |
//! | PATCH | `/api/v1/promo-code/{id}` | Partial update |
//! | DELETE | `/api/v1/promo-code/{id}` | Delete promo code and its icon |
//! | GET | `/api/v1/public/promo-code` | Live promo codes |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromoCodeService;
