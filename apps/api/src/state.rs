use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::culture::store::ChatStore;
use crate::roadmap::generator::RoadmapGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    /// Pluggable roadmap generator. Default: Groq-backed.
    pub generator: Arc<dyn RoadmapGenerator>,
    /// Culture chat history. Redis when configured, in-process otherwise.
    pub chat_store: Arc<dyn ChatStore>,
    pub config: Config,
}
