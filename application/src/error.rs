//! Error taxonomy surfaced to callers of the use cases.
//!
//! Domain functions never produce these; use cases translate empty or absent
//! results and store faults into one of four kinds. The detail string is for
//! logs only and is never shown to clients: [`TriviaError::message`] is.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    /// Malformed or missing required input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Referenced entity absent, or nothing to list at all
    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed request that could not be applied
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Unexpected fault in the data-access collaborator
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl TriviaError {
    /// Numeric error code (matches the HTTP status)
    pub fn code(&self) -> u16 {
        match self {
            TriviaError::BadRequest(_) => 400,
            TriviaError::NotFound(_) => 404,
            TriviaError::Unprocessable(_) => 422,
            TriviaError::InternalFailure(_) => 500,
        }
    }

    /// Client-facing message; carries no internal detail
    pub fn message(&self) -> &'static str {
        match self {
            TriviaError::BadRequest(_) => "Bad Request",
            TriviaError::NotFound(_) => "Not found",
            TriviaError::Unprocessable(_) => "Unprocessable Entity",
            TriviaError::InternalFailure(_) => "Internal Server Error",
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, TriviaError::InternalFailure(_))
    }
}
