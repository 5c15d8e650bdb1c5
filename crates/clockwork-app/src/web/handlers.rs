use axum::extract::State;
use axum::response::Html;
use axum::Json;
use clockwork_ai::ChatMessage;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::page::INDEX_HTML;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// New contents of the input box.
    pub message: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub session_active: bool,
    pub model_calls: u64,
    pub tokens_used: u64,
}

/// GET /: the chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/chat: run one turn and return the updated history.
#[instrument(skip_all)]
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    debug!(history = body.history.len(), "Chat message received");
    let (message, history) = state
        .conversation
        .respond(&body.message, body.history)
        .await;
    Json(ChatResponse { message, history })
}

/// POST /api/reset: start a new conversation.
#[instrument(skip_all)]
pub async fn reset(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.conversation.reset().await)
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.to_string(),
        session_active: state.conversation.session_id().await.is_some(),
        model_calls: state.runner.model_calls().await,
        tokens_used: state.runner.token_usage().await.total_tokens(),
    })
}
