mod quiz_service;

pub use quiz_service::{CategoryFilter, QuizService};
