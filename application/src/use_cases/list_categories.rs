//! List Categories use case.

use crate::error::TriviaError;
use crate::ports::question_store::QuestionStore;
use crate::use_cases::shared::internal;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryMap, format_categories};

/// Use case for reading the category reference data as an id → name map.
#[derive(Clone)]
pub struct ListCategoriesUseCase {
    store: Arc<dyn QuestionStore>,
}

impl ListCategoriesUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<CategoryMap, TriviaError> {
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(internal("list_categories"))?;

        debug!("Listing {} categories", categories.len());
        Ok(format_categories(&categories))
    }
}
