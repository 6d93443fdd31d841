use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::QuizQuestionDto;
use crate::modules::store::TriviaStore;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i32),
}

/// Pick one question uniformly at random among `candidates` whose id is
/// not in `previous`. `None` means the quiz is exhausted.
pub fn select_next<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question> {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    eligible.choose(rng).cloned()
}

/// Stateless quiz play: the client sends every id it has already shown.
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn next_question(
        &self,
        filter: CategoryFilter,
        previous: &HashSet<i32>,
    ) -> Result<QuizQuestionDto> {
        let candidates = match filter {
            CategoryFilter::All => self.store.list_questions().await?,
            CategoryFilter::Only(id) => self.store.list_questions_by_category(id).await?,
        };

        let question = select_next(candidates, previous, &mut rand::thread_rng());
        match &question {
            Some(q) => tracing::debug!("Quiz question selected: id={}, filter={:?}", q.id, filter),
            None => tracing::debug!("Quiz exhausted: filter={:?}, seen={}", filter, previous.len()),
        }

        Ok(QuizQuestionDto {
            question: question.map(QuestionResponseDto::from),
        })
    }
}
