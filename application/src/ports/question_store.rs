//! Question Store port
//!
//! Defines the interface to wherever questions and categories are kept.
//! Use cases only receive results from it; they never construct it.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Errors raised by a [`QuestionStore`] adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Storage for questions and categories
///
/// Listings are returned ordered by id. Implementations (adapters) live in
/// the infrastructure layer.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Every question
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions of one category
    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// A single question, or `None` if absent
    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Store a new question and return it with its assigned id
    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Remove a question. Fails with [`StoreError::QuestionNotFound`] if absent.
    async fn delete_by_id(&self, id: QuestionId) -> Result<(), StoreError>;

    /// Every category
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}
