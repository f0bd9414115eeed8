use crate::error::StoreError;
use async_trait::async_trait;
use configuration::Settings;
use core_types::Question;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};

/// The data-access contract for question records.
///
/// Handlers only ever see this trait, which keeps store-specific query syntax
/// out of the request path and lets tests drive the router with any
/// implementation.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Returns every stored question. An empty store is not an error.
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Returns the questions whose category equals `category` exactly.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Question>, StoreError>;

    /// Persists one question and hands it back unchanged.
    async fn insert(&self, question: Question) -> Result<Question, StoreError>;
}

/// Builds the exact-match filter used by `list_by_category`.
pub fn category_filter(category: &str) -> Document {
    doc! { "category": category }
}

/// The MongoDB-backed `QuestionStore`.
#[derive(Debug, Clone)]
pub struct DbRepository {
    collection: Collection<Question>,
}

impl DbRepository {
    /// Creates a repository over the configured database and collection.
    pub fn new(client: &Client, settings: &Settings) -> Self {
        let collection = client
            .database(&settings.database_name)
            .collection::<Question>(&settings.collection_name);
        Self { collection }
    }

    async fn find(&self, filter: Document) -> Result<Vec<Question>, StoreError> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(StoreError::QueryFailed)?;

        // The cursor is closed by the driver when it is dropped.
        let questions: Vec<Question> = cursor.try_collect().await.map_err(StoreError::from_read)?;
        Ok(questions)
    }
}

#[async_trait]
impl QuestionStore for DbRepository {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let questions = self.find(Document::new()).await?;
        tracing::debug!(count = questions.len(), "Fetched all questions.");
        Ok(questions)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Question>, StoreError> {
        let questions = self.find(category_filter(category)).await?;
        tracing::debug!(category, count = questions.len(), "Fetched questions by category.");
        Ok(questions)
    }

    async fn insert(&self, question: Question) -> Result<Question, StoreError> {
        let result = self
            .collection
            .insert_one(&question)
            .await
            .map_err(StoreError::WriteFailed)?;
        tracing::debug!(id = %result.inserted_id, category = %question.category, "Stored question.");
        Ok(question)
    }
}
