//! Create Question use case.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::shared::unprocessable;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{NewQuestion, Page, PageNumber, Question, QuestionId};

/// Raw creation fields as received from the client.
///
/// Every field is required; `None` means the client omitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl CreateQuestionInput {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }
}

/// Result of a successful creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestionOutput {
    pub created: QuestionId,
    /// The requested page of all questions, new one included
    pub page: Page<Question>,
}

/// Use case for adding a question.
///
/// Missing or invalid fields, an unknown category and store failures are
/// all `Unprocessable`.
#[derive(Clone)]
pub struct CreateQuestionUseCase {
    store: Arc<dyn QuestionStore>,
}

impl CreateQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        input: CreateQuestionInput,
        page: PageNumber,
    ) -> Result<CreateQuestionOutput, TriviaError> {
        let draft = Self::validate(input)?;

        let categories = self
            .store
            .list_categories()
            .await
            .map_err(unprocessable("list_categories"))?;
        draft.ensure_category_exists(&categories).map_err(|e| {
            warn!("Rejected new question: {}", e);
            TriviaError::Unprocessable(e.to_string())
        })?;

        let stored = self
            .store
            .insert(draft)
            .await
            .map_err(unprocessable("insert_question"))?;
        info!("Created question {}", stored.id);

        let questions = self
            .store
            .list_all()
            .await
            .map_err(unprocessable("list_questions"))?;

        Ok(CreateQuestionOutput {
            created: stored.id,
            page: Page::of(&questions, page),
        })
    }

    fn validate(input: CreateQuestionInput) -> Result<NewQuestion, TriviaError> {
        let missing = |field: &str| {
            warn!("Rejected new question: missing '{}'", field);
            TriviaError::Unprocessable(format!("missing field '{field}'"))
        };

        let question = input.question.ok_or_else(|| missing("question"))?;
        let answer = input.answer.ok_or_else(|| missing("answer"))?;
        let category = input.category.ok_or_else(|| missing("category"))?;
        let difficulty = input.difficulty.ok_or_else(|| missing("difficulty"))?;

        NewQuestion::new(question, answer, category, difficulty).map_err(|e| {
            warn!("Rejected new question: {}", e);
            TriviaError::Unprocessable(e.to_string())
        })
    }
}
