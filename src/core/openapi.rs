use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::get_question,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoriesDto,
            categories_dtos::CategoryDetailDto,
            ApiResponse<categories_dtos::CategoriesDto>,
            ApiResponse<categories_dtos::CategoryDetailDto>,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionPageDto,
            questions_dtos::QuestionListDto,
            questions_dtos::QuestionDetailDto,
            questions_dtos::QuestionCreatedDto,
            questions_dtos::QuestionDeletedDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::SearchQuestionsDto,
            ApiResponse<questions_dtos::QuestionPageDto>,
            ApiResponse<questions_dtos::QuestionListDto>,
            ApiResponse<questions_dtos::QuestionDetailDto>,
            ApiResponse<questions_dtos::QuestionCreatedDto>,
            ApiResponse<questions_dtos::QuestionDeletedDto>,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizQuestionDto,
            ApiResponse<quizzes_dtos::QuizQuestionDto>,
        )
    ),
    tags(
        (name = "categories", description = "Question categories (read-only)"),
        (name = "questions", description = "Question listing, creation, deletion and search"),
        (name = "quizzes", description = "Random unseen question for quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Categories, questions and quiz play for the trivia client",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
