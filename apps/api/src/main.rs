use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerpath_api::backend::BackendClient;
use careerpath_api::config::Config;
use careerpath_api::culture::store::{ChatStore, MemoryChatStore, RedisChatStore};
use careerpath_api::llm_client::{self, LlmClient};
use careerpath_api::roadmap::generator::GroqRoadmapGenerator;
use careerpath_api::routes::build_router;
use careerpath_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("careerpath_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Roadmap backend
    let backend = BackendClient::new(&config.api_url);
    info!("Backend client initialized ({})", config.api_url);

    // Chat history: Redis if configured
    let chat_store: Arc<dyn ChatStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis chat store initialized");
            Arc::new(RedisChatStore::new(client))
        }
        None => {
            info!("REDIS_URL not set, keeping chat history in memory");
            Arc::new(MemoryChatStore::new())
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        backend,
        generator: Arc::new(GroqRoadmapGenerator(llm)),
        chat_store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the frontend origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
