//! Quiz play.
//!
//! The server keeps no session: each request carries the ids the client
//! has already shown, and the response is one random unseen question or
//! `null` when the category is exhausted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next random unseen question |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
