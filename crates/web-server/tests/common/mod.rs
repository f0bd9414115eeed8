use async_trait::async_trait;
use axum::Router;
use core_types::Question;
use database::{QuestionStore, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use web_server::{router, AppState};

/// A `QuestionStore` that keeps documents in a vector and counts inserts.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
    inserts: AtomicUsize,
}

impl MemoryStore {
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, question: Question) -> Result<Question, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.questions.lock().unwrap().push(question.clone());
        Ok(question)
    }
}

/// A `QuestionStore` whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl QuestionStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::QueryFailed(refused()))
    }

    async fn list_by_category(&self, _category: &str) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::QueryFailed(refused()))
    }

    async fn insert(&self, _question: Question) -> Result<Question, StoreError> {
        Err(StoreError::WriteFailed(refused()))
    }
}

fn refused() -> mongodb::error::Error {
    mongodb::error::Error::custom("connection refused")
}

pub fn app(store: Arc<dyn QuestionStore>) -> Router {
    router(AppState::new(store))
}

pub fn question(text: &str, category: &str) -> Question {
    Question {
        question: text.to_string(),
        options: vec!["a".to_string(), "b".to_string()],
        answer: "a".to_string(),
        category: category.to_string(),
    }
}
