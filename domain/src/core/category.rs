//! Category reference data

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a [`Category`]. Always positive; `0` is reserved on the
/// wire for "all categories" and never names a real category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category (e.g. "Science", "Sports")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
        }
    }
}

/// Map of category id to display name, as sent to clients.
///
/// Serialized as a JSON object keyed by the stringified id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Build the id → name mapping for a list of categories.
///
/// Id uniqueness is assumed; on a duplicate the later entry wins.
pub fn format_categories(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect()
}
