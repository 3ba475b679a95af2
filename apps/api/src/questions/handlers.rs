//! Axum route handlers for the Questions API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::questions::generate_questions;
use crate::state::AppState;

const DEFAULT_COUNT: usize = 5;
const MAX_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub role: String,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
    /// Which backend actually produced the questions: "openai" or "fallback".
    pub provider: &'static str,
}

/// POST /generate-questions
///
/// Generates screening questions for a role, optionally focused on a skill.
/// `count` defaults to 5 and is clamped to 1–10.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let count = request.count.unwrap_or(DEFAULT_COUNT).clamp(1, MAX_COUNT);
    let skill = request.skill.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let (questions, provider) =
        generate_questions(state.llm.as_ref(), role, skill, count).await;

    Ok(Json(GenerateQuestionsResponse {
        questions,
        provider,
    }))
}
