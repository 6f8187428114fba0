use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ConversationTurn;
use crate::services::conversation;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub replies: Vec<String>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<ConversationTurn>,
}

// POST /api/chat
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Please enter a message.".to_string()));
    }

    let (session_id, shared) = state.session_or_new(payload.session_id.as_deref());
    let mut conv = shared.lock().await;

    tracing::info!(session = %session_id, message = %message, "incoming message");

    let turns = conversation::process_utterance(&state, &mut conv, message).await;

    Ok(Json(ChatResponse {
        session_id,
        replies: turns.into_iter().map(|t| t.content).collect(),
    }))
}

// GET /api/chat/:session_id
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let shared = state
        .session(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("session {session_id}")))?;
    let conv = shared.lock().await;

    Ok(Json(HistoryResponse {
        session_id,
        started_at: conv.started_at,
        turns: conv.displayable().to_vec(),
    }))
}

// DELETE /api/chat/:session_id
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.remove_session(&session_id) {
        tracing::info!(session = %session_id, "conversation discarded");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("session {session_id}")))
    }
}
