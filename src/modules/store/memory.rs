use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::TriviaStore;

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// In-memory [`TriviaStore`] for tests.
///
/// Rows are kept in id order. `set_failing(true)` makes every call return
/// a database error.
#[derive(Debug, Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
    failing: AtomicBool,
}

impl MemoryTriviaStore {
    pub fn new(categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map(|q| q.id + 1).unwrap_or(1);
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.check()?;
        Ok(self.tables.read().await.questions.clone())
    }

    async fn list_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.check()?;
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question> {
        self.check()?;
        let mut tables = self.tables.write().await;

        if !tables.categories.iter().any(|c| c.id == new.category) {
            return Err(AppError::Database(sqlx::Error::Protocol(format!(
                "insert violates foreign key: category {} does not exist",
                new.category
            ))));
        }

        let id = tables.next_question_id.max(1);
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_question_id = id + 1;
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }

    async fn count_questions(&self) -> Result<i64> {
        self.check()?;
        Ok(self.tables.read().await.questions.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_store;

    #[test]
    fn test_search_is_case_insensitive() {
        let store = seeded_store();
        let found = tokio_test::block_on(store.search_questions("PALACE")).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].question.contains("palace"));
    }

    #[test]
    fn test_insert_assigns_next_id() {
        let store = seeded_store();
        let before = tokio_test::block_on(store.count_questions()).unwrap();
        let created = tokio_test::block_on(store.insert_question(NewQuestion {
            question: "Which planet is known as the red planet?".to_string(),
            answer: "Mars".to_string(),
            category: 1,
            difficulty: 1,
        }))
        .unwrap();

        let max_seeded = tokio_test::block_on(store.list_questions())
            .unwrap()
            .iter()
            .filter(|q| q.id != created.id)
            .map(|q| q.id)
            .max()
            .unwrap();
        assert_eq!(created.id, max_seeded + 1);
        assert_eq!(
            tokio_test::block_on(store.count_questions()).unwrap(),
            before + 1
        );
    }

    #[test]
    fn test_failing_mode_returns_database_error() {
        let store = seeded_store();
        store.set_failing(true);
        assert!(matches!(
            tokio_test::block_on(store.list_categories()),
            Err(AppError::Database(_))
        ));
    }
}
