//! Request handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rxplay_engine::guard::check_text_size;
use rxplay_engine::{MatchRequest, MatchSuccess};
use serde::Serialize;

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct Pong {
    pub msg: &'static str,
}

/// Liveness probe
pub async fn ping() -> Json<Pong> {
    Json(Pong { msg: "pong" })
}

/// Evaluate one request
///
/// # Errors
///
/// Returns `ApiError::Eval` for oversized text, invalid patterns and timeouts.
pub async fn regex_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchSuccess>, ApiError> {
    let text_bytes = request.text.len();
    let pattern_len = request.pattern.len();

    // Reject before spending a blocking thread on it
    if let Err(err) = check_text_size(&request.text, state.config.eval.max_text_bytes) {
        tracing::info!(text_bytes, "rejected oversized text");
        return Err(err.into());
    }

    let evaluator = state.evaluator.clone();
    let outcome = tokio::task::spawn_blocking(move || evaluator.evaluate(request)).await?;

    match outcome {
        Ok(success) => {
            tracing::info!(
                text_bytes,
                pattern_len,
                count = success.count,
                elapsed_ms = success.elapsed_ms,
                "evaluated"
            );
            Ok(Json(success))
        }
        Err(err) => {
            tracing::info!(text_bytes, pattern_len, kind = %err.kind(), "evaluation failed");
            Err(err.into())
        }
    }
}
