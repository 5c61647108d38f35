//! Search and category filtering over question records

use crate::core::category::CategoryId;
use crate::core::question::Question;

/// Whether `text` contains `term`, ignoring case.
///
/// An empty term is a substring of everything.
pub fn contains_ignore_case(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term` (case-insensitive), order preserved.
pub fn search(term: &str, records: &[Question]) -> Vec<Question> {
    records
        .iter()
        .filter(|q| contains_ignore_case(&q.text, term))
        .cloned()
        .collect()
}

/// Questions belonging to `category_id`, order preserved.
pub fn filter_by_category(category_id: CategoryId, records: &[Question]) -> Vec<Question> {
    records
        .iter()
        .filter(|q| q.category_id == category_id)
        .cloned()
        .collect()
}
