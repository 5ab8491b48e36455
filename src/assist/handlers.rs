use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    assist::services::{is_hindi, reply_for},
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[instrument(skip(payload))]
pub async fn chat(payload: Option<Json<ChatRequest>>) -> Json<ChatResponse> {
    let message = payload.and_then(|Json(p)| p.message).unwrap_or_default();
    debug!(hindi = is_hindi(&message), len = message.len(), "chat message");
    Json(ChatResponse {
        reply: reply_for(&message).to_string(),
    })
}
