//! Quiz domain
//!
//! A quiz serves one unseen question at a time from a chosen category until
//! none remain. Progress lives entirely with the client.

pub mod picker;
pub mod selector;

pub use picker::{FixedIndexPicker, Picker, pick_one};
pub use selector::{QuizCategory, QuizOutcome, QuizState, next_question, remaining_questions};
