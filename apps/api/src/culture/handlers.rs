//! Axum route handlers for the culture explorer.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::culture::client::ClientId;
use crate::culture::{find_culture, Culture, Message, Sender, CULTURES};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub user_message: Message,
    pub bot_message: Message,
}

fn culture_or_404(key: &str) -> Result<&'static Culture, AppError> {
    find_culture(key).ok_or_else(|| AppError::NotFound(format!("Culture '{key}' not found")))
}

/// GET /api/v1/culture
pub async fn handle_list() -> Json<&'static [Culture]> {
    Json(CULTURES)
}

/// GET /api/v1/culture/:key/messages
///
/// Returns the client's saved history, or just the greeting for a fresh
/// conversation.
pub async fn handle_history(
    State(state): State<AppState>,
    client: ClientId,
    Path(key): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let culture = culture_or_404(&key)?;
    let history = state.chat_store.load(client.as_str(), culture.key).await?;
    if history.is_empty() {
        return Ok(Json(vec![culture.greeting_message()]));
    }
    Ok(Json(history))
}

/// POST /api/v1/culture/:key/messages
///
/// Appends the user's message and the bot's reply, then saves the whole
/// history back.
pub async fn handle_send(
    State(state): State<AppState>,
    client: ClientId,
    Path(key): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let content = request.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let culture = culture_or_404(&key)?;
    let mut history = state.chat_store.load(client.as_str(), culture.key).await?;
    if history.is_empty() {
        history.push(culture.greeting_message());
    }

    let user_message = Message::new(content, Sender::User);
    let bot_message = culture.bot_reply(content, &state.config.tts_base_url);
    history.push(user_message.clone());
    history.push(bot_message.clone());

    state
        .chat_store
        .save(client.as_str(), culture.key, &history)
        .await?;
    info!(culture = culture.key, messages = history.len(), "Culture chat updated");

    Ok(Json(SendMessageResponse {
        user_message,
        bot_message,
    }))
}

/// DELETE /api/v1/culture/:key/messages
pub async fn handle_clear(
    State(state): State<AppState>,
    client: ClientId,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let culture = culture_or_404(&key)?;
    state.chat_store.clear(client.as_str(), culture.key).await?;
    Ok(StatusCode::NO_CONTENT)
}
