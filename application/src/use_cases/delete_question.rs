//! Delete Question use case.

use crate::error::TriviaError;
use crate::ports::question_store::{QuestionStore, StoreError};
use crate::use_cases::shared::unprocessable;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{Page, PageNumber, Question, QuestionId};

/// Result of a successful deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteQuestionOutput {
    pub deleted: QuestionId,
    /// The requested page of the remaining questions
    pub page: Page<Question>,
}

/// Use case for removing a question by id.
///
/// A missing id is `NotFound`; any other store failure is `Unprocessable`.
#[derive(Clone)]
pub struct DeleteQuestionUseCase {
    store: Arc<dyn QuestionStore>,
}

impl DeleteQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        id: QuestionId,
        page: PageNumber,
    ) -> Result<DeleteQuestionOutput, TriviaError> {
        let existing = self
            .store
            .get(id)
            .await
            .map_err(unprocessable("get_question"))?;

        if existing.is_none() {
            warn!("Delete requested for missing question {}", id);
            return Err(TriviaError::NotFound(format!("question {id}")));
        }

        match self.store.delete_by_id(id).await {
            Ok(()) => {}
            // Removed concurrently between the lookup and the delete
            Err(StoreError::QuestionNotFound(_)) => {
                return Err(TriviaError::NotFound(format!("question {id}")));
            }
            Err(e) => return Err(unprocessable("delete_question")(e)),
        }
        info!("Deleted question {}", id);

        let remaining = self
            .store
            .list_all()
            .await
            .map_err(unprocessable("list_questions"))?;

        Ok(DeleteQuestionOutput {
            deleted: id,
            page: Page::of(&remaining, page),
        })
    }
}
