//! Inbox and AI mentor chat.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mock_api::MentorResponse;
use serde::Deserialize;
use skillsync_core::{Message, MessageChannel};
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessage {
    pub body: String,
    #[serde(default = "default_channel")]
    pub channel: MessageChannel,
}

fn default_channel() -> MessageChannel {
    MessageChannel::MentorChat
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.api.messages().list().await)
}

/// Post a message. A mentor-chat reply lands later and shows up in the
/// message list; the response does not wait for it.
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<SendMessage>,
) -> Result<(StatusCode, Json<Message>)> {
    let sent = state
        .api
        .messages()
        .send(&request.body, request.channel)
        .await?;

    if sent.mentor_reply.is_some() {
        debug!("Mentor reply pending for {}", sent.message.id);
    }
    Ok((StatusCode::CREATED, Json(sent.message)))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<MentorResponse>> {
    Ok(Json(state.api.mentor().chat(&request.message).await?))
}
