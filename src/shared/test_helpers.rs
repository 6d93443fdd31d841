use std::sync::Arc;

use axum::Router;

use crate::core::app::api_router;
use crate::features::categories::models::Category;
use crate::features::questions::models::Question;
use crate::modules::store::MemoryTriviaStore;

pub fn category(id: i32, category_type: &str) -> Category {
    Category {
        id,
        category_type: category_type.to_string(),
    }
}

pub fn question(id: i32, category: i32, text: &str) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: id % 5 + 1,
    }
}

/// Science (2 questions), Geography (3 questions), Art (none)
pub fn seeded_store() -> MemoryTriviaStore {
    MemoryTriviaStore::new(
        vec![
            category(1, "Science"),
            category(2, "Geography"),
            category(3, "Art"),
        ],
        vec![
            question(1, 1, "What is the heaviest organ in the human body?"),
            question(2, 1, "Who discovered penicillin?"),
            question(
                3,
                2,
                "Which palace housed the French royal court before the Revolution?",
            ),
            question(4, 2, "What is the largest lake in Africa?"),
            question(5, 2, "Hagia Sophia stands in which modern city?"),
        ],
    )
}

/// One category holding exactly questions 1 and 2
pub fn science_store() -> MemoryTriviaStore {
    MemoryTriviaStore::new(
        vec![category(1, "Science")],
        vec![
            question(1, 1, "What is the chemical symbol for gold?"),
            question(2, 1, "How many bones are in the adult human body?"),
        ],
    )
}

/// Questions 1..=count alternating between two categories
pub fn numbered_store(count: i32) -> MemoryTriviaStore {
    MemoryTriviaStore::new(
        vec![category(1, "Science"), category(2, "History")],
        (1..=count)
            .map(|id| question(id, id % 2 + 1, &format!("Question number {}?", id)))
            .collect(),
    )
}

/// Full API router over the seeded in-memory store
pub fn test_app() -> Router {
    test_app_with(seeded_store())
}

pub fn test_app_with(store: MemoryTriviaStore) -> Router {
    api_router(Arc::new(store))
}
