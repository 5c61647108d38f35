//! Domain layer for trivia-api
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns, and
//! performs no I/O: every operation is a pure function over records handed
//! in by the caller.
//!
//! # Core Concepts
//!
//! ## Listing
//!
//! - **Paginator**: fixed pages of ten records, 1-based page numbers
//! - **Search**: case-insensitive substring match on question text
//!
//! ## Quiz
//!
//! - **Selector**: uniform random draw among questions the client has not
//!   seen yet, or an exhaustion signal once none remain
//! - **Picker**: injected randomness so draws are testable

pub mod core;
pub mod listing;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::{
    category::{Category, CategoryId, CategoryMap, format_categories},
    error::DomainError,
    question::{MAX_DIFFICULTY, MIN_DIFFICULTY, NewQuestion, Question, QuestionId},
};
pub use listing::{
    Page, PageNumber, QUESTIONS_PER_PAGE, filter_by_category, paginate, paginate_with_size,
    search,
};
pub use quiz::{
    FixedIndexPicker, Picker, QuizCategory, QuizOutcome, QuizState, next_question, pick_one,
};
