//! Client identity for culture chat history.
//!
//! Each browser keeps its own conversations, so every history request names
//! the client it belongs to with an `X-Client-Id` header (a random id the
//! client generates once and remembers).

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
const MAX_CLIENT_ID_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Accepts 1..=64 ASCII letters, digits, `-` or `_`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.len() <= MAX_CLIENT_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::Validation(format!(
                "{CLIENT_ID_HEADER} must be 1-{MAX_CLIENT_ID_LEN} letters, digits, '-' or '_'"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Validation(format!("{CLIENT_ID_HEADER} header is required")))?;
        ClientId::parse(raw)
    }
}
