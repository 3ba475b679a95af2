//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluation::evaluator::Evaluation;
use crate::evaluation::ranking::{rank_candidates, CandidateIn, RankedCandidate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Raw answer, optionally prefixed with "Candidate says: ...".
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateIn>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<RankedCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /evaluate-answer
///
/// Evaluates a single free-text answer. An empty answer is valid input and
/// scores 1.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>, AppError> {
    let evaluation = state.evaluator.evaluate(&request.text).await?;
    Ok(Json(evaluation))
}

/// POST /rank-candidates
///
/// Evaluates a batch of candidates concurrently and returns them ranked,
/// highest score first.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation("No candidates provided".to_string()));
    }

    let ranked = rank_candidates(state.evaluator.as_ref(), request.candidates).await?;

    Ok(Json(RankResponse { ranked }))
}
