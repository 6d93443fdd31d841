use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::services::CategoryFilter;
use crate::shared::constants::ALL_CATEGORIES_ID;
use crate::shared::de::{i32_list_flexible, optional_i32_flexible};

/// Category chosen on the quiz screen. `id = 0` means every category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(default, deserialize_with = "optional_i32_flexible")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,

    /// Display label; not used for selection
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already shown in this play session
    #[serde(default, deserialize_with = "i32_list_flexible")]
    pub previous_questions: Vec<i32>,

    pub quiz_category: Option<QuizCategoryDto>,
}

impl QuizRequestDto {
    /// Resolve the category filter and the set of already-shown ids.
    pub fn into_selection(self) -> Result<(CategoryFilter, HashSet<i32>)> {
        let category = self
            .quiz_category
            .ok_or_else(|| AppError::Validation("quiz_category is required".to_string()))?;
        let id = category
            .id
            .ok_or_else(|| AppError::Validation("quiz_category.id is required".to_string()))?;

        let filter = match id {
            ALL_CATEGORIES_ID => CategoryFilter::All,
            id if id > 0 => CategoryFilter::Only(id),
            id => {
                return Err(AppError::Validation(format!(
                    "quiz_category.id must be 0 or a category id, got {}",
                    id
                )))
            }
        };

        Ok((filter, self.previous_questions.into_iter().collect()))
    }
}

/// Response DTO for the next quiz question; `null` once the quiz is exhausted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionDto {
    pub question: Option<QuestionResponseDto>,
}
