//! Homepage hero sliders.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/v1/slider` | Create slider (JSON or multipart with `image`) |
//! | GET | `/api/v1/slider` | List sliders (admin) |
//! | PATCH | `/api/v1/slider/reorder` | Rewrite display order |
//! | GET | `/api/v1/slider/{id}` | Get slider |
//! | PATCH | `/api/v1/slider/{id}` | Partial update |
//! | DELETE | `/api/v1/slider/{id}` | Delete slider and its image |
//! | GET | `/api/v1/public/slider` | Active sliders |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SliderService;
