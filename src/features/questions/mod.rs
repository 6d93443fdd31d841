//! Trivia questions: paginated listing, create, delete and text search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten questions per page plus the category map |
//! | POST | `/questions` | Create a question |
//! | GET | `/questions/{id}` | Single question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive substring search |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
