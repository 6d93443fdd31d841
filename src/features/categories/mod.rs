//! Question categories.
//!
//! Categories are seeded outside this service and are read-only here.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | All categories as `{id: type}` |
//! | GET | `/categories/{id}` | Single category |
//! | GET | `/categories/{id}/questions` | Questions of one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
