pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::evaluation::handlers as evaluation_handlers;
use crate::questions::handlers as questions_handlers;
use crate::state::AppState;

/// Fallback for unknown paths, so 404s share the JSON error envelope.
async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/evaluate-answer",
            post(evaluation_handlers::handle_evaluate_answer),
        )
        .route(
            "/rank-candidates",
            post(evaluation_handlers::handle_rank_candidates),
        )
        .route(
            "/generate-questions",
            post(questions_handlers::handle_generate_questions),
        )
        .fallback(not_found)
        .with_state(state)
}
