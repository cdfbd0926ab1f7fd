#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use careerpath_api::backend::BackendClient;
use careerpath_api::config::Config;
use careerpath_api::culture::client::CLIENT_ID_HEADER;
use careerpath_api::culture::store::MemoryChatStore;
use careerpath_api::errors::AppError;
use careerpath_api::roadmap::generator::{GenerateRoadmapRequest, RoadmapGenerator};
use careerpath_api::roadmap::models::{Roadmap, RoadmapStep};
use careerpath_api::routes::build_router;
use careerpath_api::state::AppState;

/// Returns a fixed two-step roadmap named after the requested career.
pub struct CannedGenerator;

#[async_trait]
impl RoadmapGenerator for CannedGenerator {
    async fn generate(&self, request: &GenerateRoadmapRequest) -> Result<Roadmap, AppError> {
        let step = |title: &str| RoadmapStep {
            title: title.to_string(),
            description: String::new(),
            section: Some("Foundations".to_string()),
            icon: None,
            resources: vec![],
            tips: vec![],
            completed: false,
        };
        Ok(Roadmap {
            id: "generated".to_string(),
            title: format!("{} Roadmap", request.career.trim()),
            description: String::new(),
            steps: vec![step("Basics"), step("Projects")],
        })
    }
}

/// Full router with an in-memory chat store and a canned generator.
/// `api_url` is where backend calls go (a wiremock server, or an unused port).
pub fn build_test_app(api_url: &str) -> Router {
    let state = AppState {
        backend: BackendClient::new(api_url),
        generator: Arc::new(CannedGenerator),
        chat_store: Arc::new(MemoryChatStore::new()),
        config: Config::for_tests(api_url),
    };
    build_router(state)
}

pub fn offline_app() -> Router {
    build_test_app("http://127.0.0.1:9")
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    dispatch(app, builder, body).await
}

/// Like `send`, identifying the caller with a culture-chat client id.
pub async fn send_as_client(
    app: Router,
    method: Method,
    uri: &str,
    client: &str,
    body: Option<Value>,
) -> Response {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CLIENT_ID_HEADER, client);
    dispatch(app, builder, body).await
}

async fn dispatch(app: Router, builder: axum::http::request::Builder, body: Option<Value>) -> Response {
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
