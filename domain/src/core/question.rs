//! Question entity and creation draft

use super::category::{Category, CategoryId};
use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest accepted difficulty score
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted difficulty score
pub const MAX_DIFFICULTY: u8 = 5;

/// Identifier of a [`Question`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trivia question (Entity)
///
/// Identity is `id`. Serializes to the client-facing shape
/// `{ id, question, answer, category, difficulty }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    pub difficulty: u8,
}

impl Question {
    /// Materialize a validated draft under the id assigned by the store
    pub fn from_new(id: QuestionId, draft: NewQuestion) -> Self {
        Self {
            id,
            text: draft.text,
            answer: draft.answer,
            category_id: draft.category_id,
            difficulty: draft.difficulty,
        }
    }
}

/// A validated question that has not been stored yet (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
    answer: String,
    category_id: CategoryId,
    difficulty: u8,
}

impl NewQuestion {
    /// Validate raw creation fields.
    ///
    /// Text and answer are trimmed and must not be blank, the category id
    /// must be positive and the difficulty must lie in
    /// `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Result<Self, DomainError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(DomainError::BlankField("question"));
        }

        let answer = answer.into().trim().to_string();
        if answer.is_empty() {
            return Err(DomainError::BlankField("answer"));
        }

        let category_id = u32::try_from(category)
            .ok()
            .filter(|id| *id > 0)
            .map(CategoryId)
            .ok_or(DomainError::InvalidCategory(category))?;

        let difficulty = u8::try_from(difficulty)
            .ok()
            .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
            .ok_or(DomainError::DifficultyOutOfRange(difficulty))?;

        Ok(Self {
            text,
            answer,
            category_id,
            difficulty,
        })
    }

    /// Check that the referenced category is one of `categories`
    pub fn ensure_category_exists(&self, categories: &[Category]) -> Result<(), DomainError> {
        if categories.iter().any(|c| c.id == self.category_id) {
            Ok(())
        } else {
            Err(DomainError::UnknownCategory(self.category_id))
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}
