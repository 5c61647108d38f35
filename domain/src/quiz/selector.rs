//! Quiz question selection
//!
//! One transition per request. The selector keeps no state: the client
//! resends the ids it has already seen each turn, and the outcome is derived
//! from that exclusion list and the candidate pool alone.
//!
//! ```text
//!   candidates = pool            (All)
//!              | pool ∩ category (Only)
//!   remaining  = candidates \ seen
//!   remaining == ∅  → Exhausted
//!   otherwise       → Next(uniform draw from remaining)
//! ```

use super::picker::{Picker, pick_one};
use crate::core::category::CategoryId;
use crate::core::question::{Question, QuestionId};
use crate::listing::search::filter_by_category;
use std::collections::HashSet;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    /// Every question regardless of category
    All,
    /// Only questions of one category
    Only(CategoryId),
}

impl QuizCategory {
    /// Interpret a wire category id; `0` selects all categories.
    pub fn from_wire(id: u32) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Only(CategoryId(id))
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(*id),
        }
    }
}

/// Client-supplied quiz progress for a single turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub category: QuizCategory,
    /// Ids already shown to the client; trusted as-is.
    pub seen_ids: HashSet<QuestionId>,
}

impl QuizState {
    pub fn new(category: QuizCategory, seen_ids: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            category,
            seen_ids: seen_ids.into_iter().collect(),
        }
    }

    /// Draw the next question for this state from `pool`
    pub fn next_from(&self, pool: &[Question], picker: &dyn Picker) -> QuizOutcome {
        next_question(self.category, &self.seen_ids, pool, picker)
    }
}

/// Result of one quiz turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question was drawn
    Next(Question),
    /// No unseen question remains; the quiz is complete
    Exhausted,
}

impl QuizOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Next(q) => Some(q),
            Self::Exhausted => None,
        }
    }

    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Next(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Questions from `pool` eligible for the next draw
pub fn remaining_questions(
    category: QuizCategory,
    seen: &HashSet<QuestionId>,
    pool: &[Question],
) -> Vec<Question> {
    let candidates = match category {
        QuizCategory::All => pool.to_vec(),
        QuizCategory::Only(id) => filter_by_category(id, pool),
    };
    candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect()
}

/// Select the next unseen question, or signal exhaustion.
///
/// Every remaining question is equally likely provided `picker` is fair;
/// difficulty and pool order carry no weight.
pub fn next_question(
    category: QuizCategory,
    seen: &HashSet<QuestionId>,
    pool: &[Question],
    picker: &dyn Picker,
) -> QuizOutcome {
    let remaining = remaining_questions(category, seen, pool);
    match pick_one(picker, &remaining) {
        Some(question) => QuizOutcome::Next(question.clone()),
        None => QuizOutcome::Exhausted,
    }
}
