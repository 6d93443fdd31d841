use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    category_map, CategoriesDto, CategoryDetailDto, CategoryResponseDto,
};
use crate::features::categories::models::Category;
use crate::features::questions::dtos::{QuestionListDto, QuestionResponseDto};
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All categories as an id -> type map. An empty table is a 404.
    pub async fn list(&self) -> Result<CategoriesDto> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(CategoriesDto {
            categories: category_map(categories),
        })
    }

    /// Get category by id
    pub async fn get(&self, id: i32) -> Result<CategoryDetailDto> {
        let category = self.find(id).await?;
        Ok(CategoryDetailDto {
            category: CategoryResponseDto::from(category),
        })
    }

    /// Questions belonging to one category
    pub async fn list_questions(&self, id: i32) -> Result<QuestionListDto> {
        let category = self.find(id).await?;

        let questions = self.store.list_questions_by_category(category.id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Category {} has no questions",
                category.id
            )));
        }

        Ok(QuestionListDto {
            total_questions: questions.len() as i64,
            questions: questions.into_iter().map(QuestionResponseDto::from).collect(),
            current_category: Some(category.category_type),
        })
    }

    async fn find(&self, id: i32) -> Result<Category> {
        if id < 1 {
            return Err(AppError::BadRequest(format!(
                "Category id must be positive, got {}",
                id
            )));
        }

        self.store
            .find_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
