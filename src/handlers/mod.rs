pub mod chat;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::send_message))
        .route(
            "/api/chat/:session_id",
            get(chat::get_history).delete(chat::delete_session),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
