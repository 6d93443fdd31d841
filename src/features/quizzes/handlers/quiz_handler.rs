use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizQuestionDto, QuizRequestDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Get the next quiz question
///
/// Picks a random question from the chosen category (`id = 0` for all
/// categories) that is not in `previous_questions`. When none is left the
/// response carries `question: null`.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = ApiResponse<QuizQuestionDto>),
        (status = 400, description = "Malformed JSON syntax", body = ErrorResponse),
        (status = 422, description = "Missing quiz_category or its id", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<ApiResponse<QuizQuestionDto>>> {
    let (filter, previous) = dto.into_selection()?;
    let next = service.next_question(filter, &previous).await?;
    Ok(Json(ApiResponse::success(next)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{science_store, test_app, test_app_with};

    #[tokio::test]
    async fn test_get_quiz() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": { "type": "Geography", "id": 2 }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["category"], 2);
    }

    #[tokio::test]
    async fn test_quiz_skips_previous_then_completes() {
        let server = TestServer::new(test_app_with(science_store())).unwrap();

        let body: Value = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [1],
                "quiz_category": { "type": "Science", "id": 1 }
            }))
            .await
            .json();
        assert_eq!(body["question"]["id"], 2);

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [1, 2],
                "quiz_category": { "type": "Science", "id": 1 }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["question"].is_null());
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let server = TestServer::new(test_app()).unwrap();

        let body: Value = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": { "type": "click", "id": 0 }
            }))
            .await
            .json();
        assert!(body["question"]["id"].is_number());
    }

    #[tokio::test]
    async fn test_422_get_quiz() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.post("/quizzes").json(&json!({})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn test_422_get_quiz_wrong_category_shape() {
        let server = TestServer::new(test_app()).unwrap();

        for payload in [
            json!({ "previous_questions": [], "quiz_category": "Science" }),
            json!({ "previous_questions": [], "quiz_category": { "id": "abc" } }),
        ] {
            let response = server.post("/quizzes").json(&payload).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = response.json();
            assert_eq!(body["error"], 422);
            assert_eq!(body["message"], "unprocessable");
        }
    }
}
