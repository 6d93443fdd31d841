use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::shared::de::optional_i32_flexible;

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// One page of questions plus the category lookup table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionResponseDto>,
    /// Total number of questions across all pages
    pub total_questions: i64,
    /// Category id -> category type
    pub categories: BTreeMap<i32, String>,
}

/// Question list for a search or a category filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
    /// Type of the category the list was filtered by, `null` for searches
    pub current_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDetailDto {
    pub question: QuestionResponseDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedDto {
    /// Id of the new question
    pub created: i32,
    /// Text of the new question
    pub question_created: String,
    /// Requested page of all questions after the insert
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedDto {
    pub deleted: i32,
}

fn non_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Request DTO for creating a question
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation failure (422) rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(
        required(message = "question is required"),
        custom(function = "non_blank")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "answer is required"),
        custom(function = "non_blank")
    )]
    pub answer: Option<String>,

    #[validate(
        required(message = "difficulty is required"),
        range(min = MIN_DIFFICULTY, max = MAX_DIFFICULTY, message = "difficulty must be 1-5")
    )]
    #[serde(default, deserialize_with = "optional_i32_flexible")]
    #[schema(value_type = Option<i32>, minimum = 1, maximum = 5)]
    pub difficulty: Option<i32>,

    #[validate(
        required(message = "category is required"),
        range(min = 1, message = "category must be a positive id")
    )]
    #[serde(default, deserialize_with = "optional_i32_flexible")]
    #[schema(value_type = Option<i32>)]
    pub category: Option<i32>,
}

impl CreateQuestionDto {
    /// Validate and convert into an insertable question.
    pub fn into_new_question(self) -> Result<NewQuestion> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let missing = |field: &str| AppError::Validation(format!("{} is required", field));
        Ok(NewQuestion {
            question: self.question.ok_or_else(|| missing("question"))?.trim().to_string(),
            answer: self.answer.ok_or_else(|| missing("answer"))?.trim().to_string(),
            category: self.category.ok_or_else(|| missing("category"))?,
            difficulty: self.difficulty.ok_or_else(|| missing("difficulty"))?,
        })
    }
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}
