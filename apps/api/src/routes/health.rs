use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Reports readiness and which backend answers will be scored with.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "provider": state.config.provider()
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "screener-api"
    }))
}
