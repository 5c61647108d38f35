//! Shared handler state

use std::sync::Arc;
use trivia_application::{
    CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase, ListQuestionsUseCase,
    PlayQuizUseCase, QuestionStore, SearchQuestionsUseCase,
};
use trivia_domain::Picker;

/// Use cases wired to one store, cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub list_categories: ListCategoriesUseCase,
    pub list_questions: ListQuestionsUseCase,
    pub delete_question: DeleteQuestionUseCase,
    pub create_question: CreateQuestionUseCase,
    pub search_questions: SearchQuestionsUseCase,
    pub play_quiz: PlayQuizUseCase,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, picker: Arc<dyn Picker>) -> Self {
        Self {
            list_categories: ListCategoriesUseCase::new(store.clone()),
            list_questions: ListQuestionsUseCase::new(store.clone()),
            delete_question: DeleteQuestionUseCase::new(store.clone()),
            create_question: CreateQuestionUseCase::new(store.clone()),
            search_questions: SearchQuestionsUseCase::new(store.clone()),
            play_quiz: PlayQuizUseCase::new(store, picker),
        }
    }
}
