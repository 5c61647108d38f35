//! Domain error types

use super::category::CategoryId;
use thiserror::Error;

/// Domain-level errors
///
/// Raised when a draft entity violates an invariant. None of these carry
/// transport concerns; the boundary decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),

    #[error("Difficulty {0} is outside the allowed range 1..=5")]
    DifficultyOutOfRange(i64),

    #[error("Invalid category id: {0}")]
    InvalidCategory(i64),

    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),
}
