use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto, QuestionDetailDto,
    QuestionListDto, QuestionPageDto, SearchQuestionsDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::pagination::PageQuery;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = ApiResponse<QuestionPageDto>),
        (status = 400, description = "Page below 1 or malformed query string", body = ErrorResponse),
        (status = 404, description = "Page has no questions", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let page = service.list_page(query.page()?).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Get question by id
#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question found", body = ApiResponse<QuestionDetailDto>),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn get_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<QuestionDetailDto>>> {
    let question = service.get(id).await?;
    Ok(Json(ApiResponse::success(question)))
}

/// Create a question
///
/// Returns the new id together with the requested page (default: first)
/// of the updated question list.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = ApiResponse<QuestionCreatedDto>),
        (status = 400, description = "Malformed JSON body or query string", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields, or insert failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<ApiResponse<QuestionCreatedDto>>> {
    let created = service.create(dto, query.page()?).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<QuestionDeletedDto>),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<QuestionDeletedDto>>> {
    let deleted = service.delete(id).await?;
    Ok(Json(ApiResponse::success(deleted)))
}

/// Search questions by a case-insensitive substring of their text
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = ApiResponse<QuestionListDto>),
        (status = 404, description = "Empty term or no matches", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<ApiResponse<QuestionListDto>>> {
    let found = service.search(dto.search_term.as_deref()).await?;
    Ok(Json(ApiResponse::success(found)))
}
