//! Axum route handlers for the Interview API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::identity::Caller;
use crate::interview::grading::{list_assessments, save_quiz_result, SaveQuizRequest};
use crate::interview::quiz::{generate_quiz, QuizQuestion};
use crate::models::assessment::Assessment;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/v1/interview/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<QuizResponse>, AppError> {
    let questions = generate_quiz(state.store.as_ref(), state.llm.as_ref(), &caller).await?;
    Ok(Json(QuizResponse { questions }))
}

/// POST /api/v1/interview/assessments
///
/// Grades the submitted answers and stores the attempt.
pub async fn handle_save_quiz_result(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<SaveQuizRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Assessment>), AppError> {
    caller.require()?;
    let Json(request) = body?;

    let assessment =
        save_quiz_result(state.store.as_ref(), state.llm.as_ref(), &caller, request).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/interview/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Assessment>>, AppError> {
    let assessments = list_assessments(state.store.as_ref(), &caller).await?;
    Ok(Json(assessments))
}
