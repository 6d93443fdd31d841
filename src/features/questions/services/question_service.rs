use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::category_map;
use crate::features::questions::dtos::{
    CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto, QuestionDetailDto,
    QuestionListDto, QuestionPageDto, QuestionResponseDto,
};
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::pagination::paginate;

fn to_dtos(questions: Vec<Question>) -> Vec<QuestionResponseDto> {
    questions.into_iter().map(QuestionResponseDto::from).collect()
}

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of all questions. A page with no questions is a 404.
    pub async fn list_page(&self, page: i64) -> Result<QuestionPageDto> {
        let questions = self.store.list_questions().await?;
        let total_questions = questions.len() as i64;

        let current = paginate(page, &questions);
        if current.is_empty() {
            return Err(AppError::NotFound(format!(
                "Page {} is beyond the {} available questions",
                page, total_questions
            )));
        }

        let categories = self.store.list_categories().await?;

        Ok(QuestionPageDto {
            questions: to_dtos(current),
            total_questions,
            categories: category_map(categories),
        })
    }

    /// Get question by id
    pub async fn get(&self, id: i32) -> Result<QuestionDetailDto> {
        let question = self
            .store
            .find_question(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

        Ok(QuestionDetailDto {
            question: question.into(),
        })
    }

    /// Insert a question and return the requested page of the updated list
    pub async fn create(&self, dto: CreateQuestionDto, page: i64) -> Result<QuestionCreatedDto> {
        let new = dto.into_new_question()?;
        let question = self.store.insert_question(new).await?;

        tracing::info!(
            "Question created: id={}, category={}, difficulty={}",
            question.id,
            question.category,
            question.difficulty
        );

        let total_questions = self.store.count_questions().await?;
        let questions = self.store.list_questions().await?;

        Ok(QuestionCreatedDto {
            created: question.id,
            question_created: question.question,
            total_questions,
            questions: to_dtos(paginate(page, &questions)),
        })
    }

    /// Delete question by id
    pub async fn delete(&self, id: i32) -> Result<QuestionDeletedDto> {
        if !self.store.delete_question(id).await? {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(QuestionDeletedDto { deleted: id })
    }

    /// Case-insensitive substring search over question text.
    ///
    /// A missing or blank term is a 404, as is a term with no matches.
    pub async fn search(&self, term: Option<&str>) -> Result<QuestionListDto> {
        let term = term.map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(AppError::NotFound("Search term is empty".to_string()));
        }

        let questions = self.store.search_questions(term).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions match '{}'",
                term
            )));
        }

        Ok(QuestionListDto {
            total_questions: questions.len() as i64,
            questions: to_dtos(questions),
            current_category: None,
        })
    }
}
