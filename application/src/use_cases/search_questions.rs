//! Search Questions use case.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::shared::internal;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::Question;

/// Use case for case-insensitive substring search over question text.
///
/// The term is trimmed first; an empty term matches every question. No
/// matches is an empty success, not an error.
#[derive(Clone)]
pub struct SearchQuestionsUseCase {
    store: Arc<dyn QuestionStore>,
}

impl SearchQuestionsUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let term = term.trim();
        let matches = self
            .store
            .search(term)
            .await
            .map_err(internal("search_questions"))?;

        debug!("Search '{}' matched {} questions", term, matches.len());
        Ok(matches)
    }
}
