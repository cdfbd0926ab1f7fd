//! Per-client, per-culture chat history storage.
//!
//! History is kept as one JSON document per client and culture key and
//! overwritten in full on every save (last write wins). Only the most recent
//! `MAX_STORED_MESSAGES` are kept. Timestamps are stored as ISO-8601 strings
//! with millisecond precision; audio URLs are not persisted.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::culture::{Message, Sender};

const KEY_PREFIX: &str = "culture-chat:";
pub const MAX_STORED_MESSAGES: usize = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored history is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Stored timestamp is invalid: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredMessage {
    id: Uuid,
    content: String,
    sender: Sender,
    timestamp: String,
}

pub fn storage_key(client: &str, culture: &str) -> String {
    format!("{KEY_PREFIX}{client}:{culture}")
}

/// Serializes the newest `MAX_STORED_MESSAGES` messages.
pub fn encode_history(messages: &[Message]) -> Result<String, StoreError> {
    let start = messages.len().saturating_sub(MAX_STORED_MESSAGES);
    let stored: Vec<StoredMessage> = messages[start..]
        .iter()
        .map(|m| StoredMessage {
            id: m.id,
            content: m.content.clone(),
            sender: m.sender,
            timestamp: m.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
        .collect();
    Ok(serde_json::to_string(&stored)?)
}

pub fn decode_history(raw: &str) -> Result<Vec<Message>, StoreError> {
    let stored: Vec<StoredMessage> = serde_json::from_str(raw)?;
    stored
        .into_iter()
        .map(|s| {
            Ok(Message {
                id: s.id,
                content: s.content,
                sender: s.sender,
                timestamp: DateTime::parse_from_rfc3339(&s.timestamp)?.with_timezone(&Utc),
                audio_url: None,
            })
        })
        .collect()
}

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Empty when nothing has been saved for this client and culture.
    async fn load(&self, client: &str, culture: &str) -> Result<Vec<Message>, StoreError>;
    async fn save(&self, client: &str, culture: &str, messages: &[Message]) -> Result<(), StoreError>;
    async fn clear(&self, client: &str, culture: &str) -> Result<(), StoreError>;
}

/// In-process store, used when no Redis URL is configured and in tests.
#[derive(Default)]
pub struct MemoryChatStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn load(&self, client: &str, culture: &str) -> Result<Vec<Message>, StoreError> {
        match self.entries.read().await.get(&storage_key(client, culture)) {
            Some(raw) => decode_history(raw),
            None => Ok(vec![]),
        }
    }

    async fn save(&self, client: &str, culture: &str, messages: &[Message]) -> Result<(), StoreError> {
        let raw = encode_history(messages)?;
        self.entries.write().await.insert(storage_key(client, culture), raw);
        Ok(())
    }

    async fn clear(&self, client: &str, culture: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(&storage_key(client, culture));
        Ok(())
    }
}

pub struct RedisChatStore {
    client: redis::Client,
}

impl RedisChatStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatStore for RedisChatStore {
    async fn load(&self, client: &str, culture: &str) -> Result<Vec<Message>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(storage_key(client, culture)).await?;
        match raw {
            Some(raw) => decode_history(&raw),
            None => Ok(vec![]),
        }
    }

    async fn save(&self, client: &str, culture: &str, messages: &[Message]) -> Result<(), StoreError> {
        let raw = encode_history(messages)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(storage_key(client, culture), raw).await?;
        debug!(culture, count = messages.len(), "Chat history saved");
        Ok(())
    }

    async fn clear(&self, client: &str, culture: &str) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(storage_key(client, culture)).await?;
        Ok(())
    }
}
