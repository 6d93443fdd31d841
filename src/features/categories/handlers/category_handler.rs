use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::categories::dtos::{CategoriesDto, CategoryDetailDto};
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::QuestionListDto;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns categories as an object keyed by category id.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = ApiResponse<CategoriesDto>),
        (status = 404, description = "No categories exist", body = ErrorResponse),
        (status = 422, description = "Store failure", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoriesDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryDetailDto>),
        (status = 400, description = "Non-positive id", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CategoryDetailDto>>> {
    let category = service.get(id).await?;
    Ok(Json(ApiResponse::success(category)))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = ApiResponse<QuestionListDto>),
        (status = 400, description = "Non-positive id", body = ErrorResponse),
        (status = 404, description = "Unknown category or no questions", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<QuestionListDto>>> {
    let questions = service.list_questions(id).await?;
    Ok(Json(ApiResponse::success(questions)))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::shared::test_helpers::test_app;

    #[tokio::test]
    async fn test_get_categories() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["2"], "Geography");
    }

    #[tokio::test]
    async fn test_get_single_category() {
        let server = TestServer::new(test_app()).unwrap();

        let body: Value = server.get("/categories/2").await.json();
        assert_eq!(body["category"]["id"], 2);
        assert_eq!(body["category"]["type"], "Geography");

        server.get("/categories/99").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_category_questions() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories/1/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], "Science");
        let questions = body["questions"].as_array().unwrap();
        assert!(!questions.is_empty());
        assert_eq!(body["total_questions"], questions.len());
    }

    #[tokio::test]
    async fn test_404_get_category_questions_non_numeric() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories/a/questions").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn test_400_get_category_questions_zero_id() {
        let server = TestServer::new(test_app()).unwrap();

        let response = server.get("/categories/0/questions").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["message"], "bad request");
    }
}
