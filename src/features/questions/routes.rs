use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/questions/{id}",
            get(handlers::get_question).delete(handlers::delete_question),
        )
        .with_state(service)
}
