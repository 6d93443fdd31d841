use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// Read/write access to the categories and questions tables.
///
/// Every method is a single statement against the store; there is no
/// cross-call transaction.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>>;

    /// All questions ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Questions of one category ordered by id
    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Case-insensitive substring match on the question text, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>>;

    async fn insert_question(&self, new: NewQuestion) -> Result<Question>;

    /// Returns `true` if a row was removed
    async fn delete_question(&self, id: i32) -> Result<bool>;

    async fn count_questions(&self) -> Result<i64>;
}
