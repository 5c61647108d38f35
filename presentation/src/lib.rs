//! Presentation layer for trivia-api
//!
//! This crate contains the HTTP API (routes, wire bodies, error
//! responses) and the command-line definition of the server binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::Cli;
pub use http::{ApiError, AppState, build_router, serve};
