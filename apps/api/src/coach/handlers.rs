use axum::Json;
use serde::Deserialize;

use crate::coach::{reply, CoachReply};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    pub message: String,
}

/// POST /api/v1/coach/chat
pub async fn handle_chat(Json(request): Json<CoachRequest>) -> Result<Json<CoachReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(Json(reply(&request.message)))
}
