//! Seed data for the in-memory store
//!
//! A seed file is JSON in the same shape the API speaks:
//!
//! ```json
//! {
//!   "categories": [{ "id": 1, "type": "Science" }],
//!   "questions": [{ "id": 1, "question": "...", "answer": "...", "category": 1, "difficulty": 2 }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use trivia_domain::{Category, MAX_DIFFICULTY, MIN_DIFFICULTY, Question};

const SAMPLE_SEED: &str = include_str!("sample.json");

/// Errors raised while loading a seed file
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Inconsistent seed data: {0}")]
    Invalid(String),
}

/// Categories and questions to preload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

impl SeedData {
    /// The bundled sample set: six categories, nineteen questions
    pub fn sample() -> Result<Self, SeedError> {
        Self::from_json(SAMPLE_SEED)
    }

    /// Read and validate a seed file
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate seed JSON
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check id uniqueness, category references and difficulty range
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.0 == 0 {
                return Err(SeedError::Invalid("category id 0 is reserved".into()));
            }
            if !category_ids.insert(category.id) {
                return Err(SeedError::Invalid(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id) {
                return Err(SeedError::Invalid(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
            if !category_ids.contains(&question.category_id) {
                return Err(SeedError::Invalid(format!(
                    "question {} references unknown category {}",
                    question.id, question.category_id
                )));
            }
            if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&question.difficulty) {
                return Err(SeedError::Invalid(format!(
                    "question {} has difficulty {}",
                    question.id, question.difficulty
                )));
            }
        }

        Ok(())
    }
}
