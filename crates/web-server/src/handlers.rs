use crate::{error::AppError, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_types::Question;

/// # GET /questions
/// Fetches every stored question.
pub async fn get_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, AppError> {
    let questions = state.store.list_all().await.map_err(AppError::Fetch)?;
    Ok(Json(questions))
}

/// # GET /questions/category/:category
/// Fetches the questions whose category matches the path segment exactly.
pub async fn get_questions_by_category(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, AppError> {
    list_category(&state, &category).await
}

/// # GET /questions/category/
/// The empty category has no path segment of its own.
pub async fn get_questions_by_empty_category(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, AppError> {
    list_category(&state, "").await
}

async fn list_category(state: &AppState, category: &str) -> Result<Json<Vec<Question>>, AppError> {
    let questions = state
        .store
        .list_by_category(category)
        .await
        .map_err(AppError::Fetch)?;
    Ok(Json(questions))
}

/// # POST /questions
/// Validates and stores a new question, echoing it back on success.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
pub async fn add_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Question>), AppError> {
    let question: Question = serde_json::from_slice(&body)?;
    question.validate()?;

    let stored = state.store.insert(question).await.map_err(AppError::Store)?;
    Ok((StatusCode::CREATED, Json(stored)))
}
