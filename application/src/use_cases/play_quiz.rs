//! Play Quiz use case.
//!
//! Executes one quiz turn: fetch the candidate pool for the chosen category
//! and hand it to the domain selector together with the ids the client has
//! already seen. Exhaustion is a successful outcome.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::shared::internal;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{Picker, QuizOutcome, QuizState};

/// Use case for drawing the next quiz question.
///
/// Requests missing the category or the seen list are rejected before they
/// get here; see the HTTP boundary.
#[derive(Clone)]
pub struct PlayQuizUseCase {
    store: Arc<dyn QuestionStore>,
    picker: Arc<dyn Picker>,
}

impl PlayQuizUseCase {
    pub fn new(store: Arc<dyn QuestionStore>, picker: Arc<dyn Picker>) -> Self {
        Self { store, picker }
    }

    pub async fn execute(&self, state: &QuizState) -> Result<QuizOutcome, TriviaError> {
        let pool = match state.category.category_id() {
            None => self.store.list_all().await,
            Some(id) => self.store.list_by_category(id).await,
        }
        .map_err(internal("quiz_pool"))?;

        debug!(
            "Quiz turn: {} candidates, {} already seen",
            pool.len(),
            state.seen_ids.len()
        );

        let outcome = state.next_from(&pool, self.picker.as_ref());
        match &outcome {
            QuizOutcome::Next(question) => debug!("Quiz drew question {}", question.id),
            QuizOutcome::Exhausted => info!("Quiz exhausted for {:?}", state.category),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeStore;
    use trivia_domain::{CategoryId, FixedIndexPicker, QuestionId, QuizCategory};

    fn use_case(store: FakeStore, index: usize) -> PlayQuizUseCase {
        PlayQuizUseCase::new(Arc::new(store), Arc::new(FixedIndexPicker(index)))
    }

    fn sports(seen: &[u32]) -> QuizState {
        QuizState::new(
            QuizCategory::Only(CategoryId(6)),
            seen.iter().copied().map(QuestionId),
        )
    }

    #[tokio::test]
    async fn test_sports_walkthrough() {
        let use_case = use_case(FakeStore::sample(), 0);

        let first = use_case.execute(&sports(&[])).await.unwrap();
        let first_id = first.question().unwrap().id;
        assert!([QuestionId(20), QuestionId(21)].contains(&first_id));

        let second = use_case.execute(&sports(&[20])).await.unwrap();
        assert_eq!(second.question().map(|q| q.id), Some(QuestionId(21)));

        let third = use_case.execute(&sports(&[20, 21])).await.unwrap();
        assert!(third.is_exhausted());
    }

    #[tokio::test]
    async fn test_all_categories() {
        let use_case = use_case(FakeStore::sample(), 14);
        let state = QuizState::new(QuizCategory::All, Vec::<QuestionId>::new());

        let outcome = use_case.execute(&state).await.unwrap();
        assert_eq!(outcome.question().map(|q| q.id), Some(QuestionId(21)));
    }

    #[tokio::test]
    async fn test_picker_decides_draw() {
        let use_case = use_case(FakeStore::sample(), 1);
        let outcome = use_case.execute(&sports(&[])).await.unwrap();
        assert_eq!(outcome.question().map(|q| q.id), Some(QuestionId(21)));
    }

    #[tokio::test]
    async fn test_store_fault_is_internal() {
        let use_case = use_case(FakeStore::sample().failing_reads(), 0);
        let error = use_case.execute(&sports(&[])).await.unwrap_err();
        assert_eq!(error.code(), 500);
    }
}
