//! Shared utilities for use cases.
//!
//! Contains the listing view returned by the paginated use cases and the
//! helpers that turn store faults into [`TriviaError`]s.

use crate::error::TriviaError;
use crate::ports::question_store::StoreError;
use trivia_domain::{CategoryId, CategoryMap, Page, Question};
use tracing::error;

/// A page of questions together with the category reference data a client
/// needs to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: Page<Question>,
    pub categories: CategoryMap,
    /// `None` for the unfiltered listing
    pub current_category: Option<CategoryId>,
}

impl QuestionListing {
    pub fn questions(&self) -> &[Question] {
        &self.page.items
    }

    pub fn total_questions(&self) -> usize {
        self.page.total_count
    }
}

/// Map a store fault to an internal failure, logging the detail.
pub(crate) fn internal(operation: &'static str) -> impl FnOnce(StoreError) -> TriviaError {
    move |e| {
        error!("{} failed: {}", operation, e);
        TriviaError::InternalFailure(e.to_string())
    }
}

/// Map a store fault during a write to an unprocessable request.
pub(crate) fn unprocessable(operation: &'static str) -> impl FnOnce(StoreError) -> TriviaError {
    move |e| {
        error!("{} failed: {}", operation, e);
        TriviaError::Unprocessable(e.to_string())
    }
}
