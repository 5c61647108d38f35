//! Listing helpers: pagination, substring search and category filtering.
//!
//! Everything here is a pure function over records handed in by the caller.

pub mod pagination;
pub mod search;

pub use pagination::{Page, PageNumber, QUESTIONS_PER_PAGE, paginate, paginate_with_size};
pub use search::{contains_ignore_case, filter_by_category, search};
