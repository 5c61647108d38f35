//! Application layer for trivia-api
//!
//! This crate contains use cases, port definitions, and the error taxonomy
//! callers see. It depends only on the domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::TriviaError;
pub use ports::question_store::{QuestionStore, StoreError};
pub use use_cases::QuestionListing;
pub use use_cases::create_question::{
    CreateQuestionInput, CreateQuestionOutput, CreateQuestionUseCase,
};
pub use use_cases::delete_question::{DeleteQuestionOutput, DeleteQuestionUseCase};
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_questions::ListQuestionsUseCase;
pub use use_cases::play_quiz::PlayQuizUseCase;
pub use use_cases::search_questions::SearchQuestionsUseCase;
