//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
pub mod search_questions;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use shared::QuestionListing;
