//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] - a stored trivia question
//! - [`question::NewQuestion`] - a validated draft awaiting an id
//! - [`category::Category`] - category reference data
//! - [`error::DomainError`] - domain-level errors

pub mod category;
pub mod error;
pub mod question;
