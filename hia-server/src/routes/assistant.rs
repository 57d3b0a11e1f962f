//! Census-assistant endpoint: pass-through chat to the language model

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::ChatRequest;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ChatReply {
    pub response: String,
    /// RFC 3339 instant of when the reply was produced
    pub timestamp: String,
}

/// POST /api/ai-census
async fn ai_census(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let message = req.validate()?;

    let response = state
        .assistant
        .ask(&message)
        .await
        .map_err(|source| ApiError::Upstream {
            service: "assistant",
            source,
        })?;

    Ok(Json(ChatReply {
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Assistant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ai-census", post(ai_census))
}
