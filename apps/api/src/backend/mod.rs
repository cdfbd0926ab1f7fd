//! HTTP client for the external roadmap backend (auth, roadmap CRUD,
//! dashboard aggregation, goal progress).
//!
//! The backend contract is owned elsewhere; shapes this service does not
//! rely on are passed through as opaque JSON.

pub mod auth;
pub mod dashboard;
pub mod handlers;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::roadmap::models::Roadmap;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid resource id '{0}'")]
    InvalidId(String),

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `{ token, user }` as returned by `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub tracked_roadmaps: Vec<Roadmap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgressUpdate {
    pub step_index: usize,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPrompt {
    pub prompt: String,
    #[serde(default)]
    pub roadmap_id: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `<base>/<segment>/...` with every segment percent-encoded, so an id can
    /// never reach a different backend path.
    fn resource_url(&self, segments: &[&str]) -> Result<Url, BackendError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(BackendError::InvalidId(bad.to_string()));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| BackendError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments.iter());
        Ok(url)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, BackendError> {
        let req = self.client.post(self.url("/auth/login")).json(credentials);
        self.send(req, None).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, BackendError> {
        let req = self.client.post(self.url("/auth/register")).json(request);
        self.send(req, None).await
    }

    pub async fn profile(&self, token: &str) -> Result<Value, BackendError> {
        let req = self.client.get(self.url("/auth/me"));
        self.send(req, Some(token)).await
    }

    pub async fn dashboard(&self, token: &str) -> Result<Dashboard, BackendError> {
        let req = self.client.get(self.url("/dashboard/me"));
        self.send(req, Some(token)).await
    }

    pub async fn list_roadmaps(&self, token: &str) -> Result<Vec<Roadmap>, BackendError> {
        let req = self.client.get(self.url("/roadmap/"));
        self.send(req, Some(token)).await
    }

    pub async fn get_roadmap(&self, token: &str, id: &str) -> Result<Roadmap, BackendError> {
        let req = self.client.get(self.resource_url(&["roadmap", id])?);
        self.send(req, Some(token)).await
    }

    pub async fn create_roadmap(&self, token: &str, roadmap: &Roadmap) -> Result<Roadmap, BackendError> {
        let req = self.client.post(self.url("/roadmap/")).json(roadmap);
        self.send(req, Some(token)).await
    }

    pub async fn delete_roadmap(&self, token: &str, id: &str) -> Result<(), BackendError> {
        let req = self.client.delete(self.resource_url(&["roadmap", id])?);
        self.send_empty(req, Some(token)).await
    }

    pub async fn update_goal_progress(
        &self,
        token: &str,
        roadmap_id: &str,
        update: &GoalProgressUpdate,
    ) -> Result<Value, BackendError> {
        let req = self
            .client
            .patch(self.resource_url(&["goals", roadmap_id, "progress"])?)
            .json(update);
        self.send(req, Some(token)).await
    }

    /// Search-as-you-type over previously submitted roadmap prompts.
    pub async fn similar_prompts(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<SimilarPrompt>, BackendError> {
        let req = self
            .client
            .get(self.url("/roadmap/prompt"))
            .query(&[("query", query)]);
        self.send(req, token).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T, BackendError> {
        let response = self.dispatch(req, token).await?;
        Ok(response.json().await?)
    }

    async fn send_empty(&self, req: RequestBuilder, token: Option<&str>) -> Result<(), BackendError> {
        self.dispatch(req, token).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        req: RequestBuilder,
        token: Option<&str>,
    ) -> Result<reqwest::Response, BackendError> {
        let req = match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let response = req.send().await?;
        let status = response.status();
        debug!("Backend responded {} for {}", status, response.url().path());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized(message));
        }

        warn!("Backend returned {}: {}", status, message);
        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pulls a readable message out of `{"detail": ...}` / `{"message": ...}` bodies.
fn extract_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Value::String(detail)),
            ..
        }) => detail,
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorBody {
            detail: Some(other),
            ..
        }) => other.to_string(),
        _ => body.to_string(),
    }
}
