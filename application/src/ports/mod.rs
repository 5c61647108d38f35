//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Randomness is the other injected capability; its trait,
//! [`Picker`](trivia_domain::Picker), is pure enough to live in the domain.

pub mod question_store;
