//! Customer support tickets, managed from the admin panel.
//!
//! Tickets get a generated `TKT-YYYYMMDD-XXXXXX` number and start out
//! `Pending`. They have no public surface and are not cached.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/support-ticket` | Open ticket (JSON or multipart with `attachment`) |
//! | GET | `/api/v1/support-ticket` | Paginated list, newest first |
//! | GET | `/api/v1/support-ticket/{id}` | Get ticket |
//! | PATCH | `/api/v1/support-ticket/{id}` | Partial update |
//! | DELETE | `/api/v1/support-ticket/{id}` | Delete ticket and its attachment |
//! | PATCH | `/api/v1/support-ticket/{id}/status` | Change status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SupportTicketService;
