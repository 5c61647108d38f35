//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the rand-backed pickers, and configuration
//! file loading.

pub mod config;
pub mod random;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileQuizConfig,
    FileServerConfig, FileStoreConfig,
};
pub use random::{RandomPicker, SeededPicker};
pub use store::{InMemoryQuestionStore, SeedData, SeedError};
