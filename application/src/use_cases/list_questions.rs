//! List Questions use case.
//!
//! Serves paginated question listings, either unfiltered or restricted to a
//! single category. An empty page is only "not found" when there is nothing
//! to list at all; paging past the end of a non-empty listing is a normal,
//! empty result.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::shared::{QuestionListing, internal};
use std::sync::Arc;
use tracing::{debug, warn};
use trivia_domain::{CategoryId, Page, PageNumber, format_categories};

/// Use case for the paginated question listings.
#[derive(Clone)]
pub struct ListQuestionsUseCase {
    store: Arc<dyn QuestionStore>,
}

impl ListQuestionsUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// One page of all questions.
    ///
    /// Fails with `NotFound` only when the store holds no questions.
    pub async fn execute(&self, page: PageNumber) -> Result<QuestionListing, TriviaError> {
        let (questions, categories) =
            futures::try_join!(self.store.list_all(), self.store.list_categories())
                .map_err(internal("list_questions"))?;

        if questions.is_empty() {
            warn!("Question listing requested but the store is empty");
            return Err(TriviaError::NotFound("no questions stored".into()));
        }

        let page = Page::of(&questions, page);
        debug!(
            "Serving page {} ({} of {} questions)",
            page.page_number,
            page.items.len(),
            page.total_count
        );

        Ok(QuestionListing {
            page,
            categories: format_categories(&categories),
            current_category: None,
        })
    }

    /// One page of the questions in `category_id`.
    ///
    /// Fails with `NotFound` when the category does not exist. A known
    /// category with no questions yields an empty listing.
    pub async fn execute_for_category(
        &self,
        category_id: CategoryId,
        page: PageNumber,
    ) -> Result<QuestionListing, TriviaError> {
        let (questions, categories) = futures::try_join!(
            self.store.list_by_category(category_id),
            self.store.list_categories()
        )
        .map_err(internal("list_questions_by_category"))?;

        if !categories.iter().any(|c| c.id == category_id) {
            warn!("Unknown category {} requested", category_id);
            return Err(TriviaError::NotFound(format!("category {category_id}")));
        }

        let page = Page::of(&questions, page);
        debug!(
            "Serving category {} page {} ({} of {} questions)",
            category_id,
            page.page_number,
            page.items.len(),
            page.total_count
        );

        Ok(QuestionListing {
            page,
            categories: format_categories(&categories),
            current_category: Some(category_id),
        })
    }
}
