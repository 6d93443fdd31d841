use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::TriviaStore;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Build every API route over the given store.
///
/// Cross-cutting layers (CORS, tracing, request ids) are added by the
/// binary on top of this router.
pub fn api_router(store: Arc<dyn TriviaStore>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service))
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
