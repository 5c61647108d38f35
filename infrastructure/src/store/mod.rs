//! Question store adapters.
//!
//! Provides [`InMemoryQuestionStore`], which implements the
//! [`QuestionStore`](trivia_application::QuestionStore) port, and the seed
//! loader that fills it.

mod memory;
mod seed;

pub use memory::InMemoryQuestionStore;
pub use seed::{SeedData, SeedError};
