//! In-memory question store adapter.

use super::seed::SeedData;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;
use trivia_application::ports::question_store::{QuestionStore, StoreError};
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, filter_by_category, search,
};

#[derive(Debug)]
struct Tables {
    /// Keyed by id so listings come out ordered
    questions: BTreeMap<QuestionId, Question>,
    categories: Vec<Category>,
    /// Next id to hand out; never decreases, so deleted ids are not reused
    next_id: u32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            categories: Vec::new(),
            // Ids are positive; 0 is the "all categories" sentinel on the wire
            next_id: 1,
        }
    }
}

/// [`QuestionStore`] kept in process memory.
///
/// Reads take a shared lock and clone out; writes take the exclusive lock.
#[derive(Debug, Default)]
pub struct InMemoryQuestionStore {
    tables: RwLock<Tables>,
}

impl InMemoryQuestionStore {
    /// An empty store with no categories
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded from validated seed data
    pub fn from_seed(seed: SeedData) -> Self {
        let next_id = seed.questions.iter().map(|q| q.id.0).max().unwrap_or(0) + 1;
        let questions = seed.questions.into_iter().map(|q| (q.id, q)).collect();
        let mut categories = seed.categories;
        categories.sort_by_key(|c| c.id);

        Self {
            tables: RwLock::new(Tables {
                questions,
                categories,
                next_id,
            }),
        }
    }

    /// Number of stored questions
    pub async fn len(&self) -> usize {
        self.tables.read().await.questions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.questions.is_empty()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        let all: Vec<Question> = tables.questions.values().cloned().collect();
        Ok(filter_by_category(category_id, &all))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        let all: Vec<Question> = tables.questions.values().cloned().collect();
        Ok(search(term, &all))
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        let id = QuestionId(tables.next_id);
        tables.next_id = tables
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Rejected("question id space exhausted".into()))?;

        let stored = Question::from_new(id, question);
        tables.questions.insert(id, stored.clone());
        debug!("Stored question {}", id);
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        match tables.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::QuestionNotFound(id)),
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> InMemoryQuestionStore {
        InMemoryQuestionStore::from_seed(SeedData::sample().unwrap())
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let store = sample_store();
        let ids: Vec<u32> = store.list_all().await.unwrap().iter().map(|q| q.id.0).collect();

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 19);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let store = sample_store();
        let art = store.list_by_category(CategoryId(2)).await.unwrap();
        assert_eq!(art.len(), 4);
        assert!(art.iter().all(|q| q.category_id == CategoryId(2)));
    }

    #[tokio::test]
    async fn test_search() {
        let store = sample_store();
        let matches = store.search("giaconda").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, QuestionId(17));
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let store = sample_store();
        let draft = NewQuestion::new("What is the meaning of the universe?", "42", 1, 5).unwrap();

        let stored = store.insert(draft).await.unwrap();
        assert_eq!(stored.id, QuestionId(24));
        assert_eq!(store.get(QuestionId(24)).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = sample_store();
        store.delete_by_id(QuestionId(23)).await.unwrap();

        let draft = NewQuestion::new("Fresh question", "Fresh answer", 1, 1).unwrap();
        let stored = store.insert(draft).await.unwrap();
        assert_eq!(stored.id, QuestionId(24));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let store = sample_store();
        store.delete_by_id(QuestionId(17)).await.unwrap();

        assert_eq!(store.get(QuestionId(17)).await.unwrap(), None);
        assert_eq!(store.len().await, 18);
    }

    #[tokio::test]
    async fn test_delete_missing_id() {
        let store = sample_store();
        assert_eq!(
            store.delete_by_id(QuestionId(999)).await,
            Err(StoreError::QuestionNotFound(QuestionId(999)))
        );
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryQuestionStore::new();
        assert!(store.is_empty().await);
        assert!(store.list_categories().await.unwrap().is_empty());

        let draft = NewQuestion::new("q", "a", 1, 1).unwrap();
        assert_eq!(store.insert(draft).await.unwrap().id, QuestionId(1));
    }

    #[tokio::test]
    async fn test_empty_store_never_hands_out_zero() {
        let store = InMemoryQuestionStore::new();
        let mut ids = Vec::new();
        for n in 0..3 {
            let draft = NewQuestion::new(format!("q{n}"), "a", 1, 1).unwrap();
            ids.push(store.insert(draft).await.unwrap().id);
        }
        assert_eq!(ids, vec![QuestionId(1), QuestionId(2), QuestionId(3)]);
    }
}
