//! In-process store double shared by the use case tests.

use crate::ports::question_store::{QuestionStore, StoreError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, filter_by_category, search,
};

pub(crate) fn question(id: u32, text: &str, category: u32) -> Question {
    Question {
        id: QuestionId(id),
        text: text.to_string(),
        answer: format!("answer {id}"),
        category_id: CategoryId(category),
        difficulty: 2,
    }
}

/// Store backed by a `Vec`, with switches to simulate faults
pub(crate) struct FakeStore {
    questions: Mutex<Vec<Question>>,
    categories: Vec<Category>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FakeStore {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
            categories: vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
                Category::new(6, "Sports"),
            ],
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Twelve science questions, the Giaconda art question and two sports ones
    pub(crate) fn sample() -> Self {
        let mut questions: Vec<Question> = (1..=12)
            .map(|id| question(id, &format!("Science question {id}"), 1))
            .collect();
        questions.push(question(17, "La Giaconda is better known as what?", 2));
        questions.push(question(
            20,
            "Which is the only team to play in every soccer World Cup tournament?",
            6,
        ));
        questions.push(question(
            21,
            "Which country won the first ever soccer World Cup in 1930?",
            6,
        ));
        Self::new(questions)
    }

    pub(crate) fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read failure".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for FakeStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        self.check_read()?;
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError> {
        self.check_read()?;
        Ok(filter_by_category(category_id, &self.questions.lock().unwrap()))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.check_read()?;
        Ok(search(term, &self.questions.lock().unwrap()))
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.check_read()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        self.check_write()?;
        let mut questions = self.questions.lock().unwrap();
        let next = questions.iter().map(|q| q.id.0).max().unwrap_or(0) + 1;
        let stored = Question::from_new(QuestionId(next), question);
        questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<(), StoreError> {
        self.check_write()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(StoreError::QuestionNotFound(id));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check_read()?;
        Ok(self.categories.clone())
    }
}
