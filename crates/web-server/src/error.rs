use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::CoreError;
use database::StoreError;
use serde_json::json;
use thiserror::Error;

pub const FETCH_FAILED: &str = "Failed to fetch questions from database";
pub const STORE_FAILED: &str = "Failed to store question in database";

#[derive(Error, Debug)]
pub enum AppError {
    /// A read against the store failed, including decode failures.
    #[error("Fetch error: {0}")]
    Fetch(#[source] StoreError),
    /// Persisting a new question failed.
    #[error("Store error: {0}")]
    Store(#[source] StoreError),
    /// The request body could not be parsed into a question.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Validation(#[from] CoreError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidBody(err.to_string())
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Store failures are logged with their cause, while the client only ever
/// sees a fixed message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Fetch(store_err) => {
                tracing::error!(error = ?store_err, "Failed to fetch questions.");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED.to_string())
            }
            AppError::Store(store_err) => {
                tracing::error!(error = ?store_err, "Failed to store question.");
                (StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILED.to_string())
            }
            AppError::InvalidBody(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Validation(core_err) => (StatusCode::BAD_REQUEST, core_err.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
