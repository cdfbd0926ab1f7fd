//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::auth::BearerToken;
use crate::backend::{GoalProgressUpdate, SimilarPrompt};
use crate::errors::AppError;
use crate::roadmap::generator::GenerateRoadmapRequest;
use crate::roadmap::models::Roadmap;
use crate::roadmap::progress::Progress;
use crate::roadmap::samples::search_samples;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct RoadmapDetailResponse {
    pub roadmap: Roadmap,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub roadmap_id: String,
    pub progress: Progress,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmaps/generate
///
/// Generates a roadmap with the LLM. Nothing is persisted; the client saves it
/// through `POST /api/v1/roadmaps` if the user keeps it.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<RoadmapDetailResponse>, AppError> {
    if request.career.trim().is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }

    let roadmap = state.generator.generate(&request).await?;
    let progress = roadmap.progress();
    Ok(Json(RoadmapDetailResponse { roadmap, progress }))
}

/// GET /api/v1/roadmaps/samples?q=
pub async fn handle_samples(Query(params): Query<SearchQuery>) -> Json<Vec<Roadmap>> {
    Json(search_samples(&params.q))
}

/// GET /api/v1/roadmaps/similar?q=
///
/// Search-as-you-type over earlier prompts. Blank queries short-circuit.
pub async fn handle_similar(
    State(state): State<AppState>,
    token: Option<BearerToken>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<SimilarPrompt>>, AppError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Json(vec![]));
    }
    let prompts = state
        .backend
        .similar_prompts(token.as_ref().map(BearerToken::as_str), query)
        .await?;
    Ok(Json(prompts))
}

/// GET /api/v1/roadmaps
pub async fn handle_list(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Vec<Roadmap>>, AppError> {
    Ok(Json(state.backend.list_roadmaps(token.as_str()).await?))
}

/// POST /api/v1/roadmaps
pub async fn handle_create(
    State(state): State<AppState>,
    token: BearerToken,
    Json(roadmap): Json<Roadmap>,
) -> Result<(StatusCode, Json<Roadmap>), AppError> {
    if roadmap.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let created = state.backend.create_roadmap(token.as_str(), &roadmap).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/roadmaps/:id
pub async fn handle_get(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
) -> Result<Json<RoadmapDetailResponse>, AppError> {
    let roadmap = state.backend.get_roadmap(token.as_str(), &id).await?;
    let progress = roadmap.progress();
    Ok(Json(RoadmapDetailResponse { roadmap, progress }))
}

/// DELETE /api/v1/roadmaps/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.backend.delete_roadmap(token.as_str(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/roadmaps/:id/progress
///
/// Checks the step index against the current roadmap before recording it.
pub async fn handle_progress(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<String>,
    Json(update): Json<GoalProgressUpdate>,
) -> Result<Json<ProgressResponse>, AppError> {
    let mut roadmap = state.backend.get_roadmap(token.as_str(), &id).await?;
    let progress = roadmap.set_step_completed(update.step_index, update.completed)?;

    state
        .backend
        .update_goal_progress(token.as_str(), &id, &update)
        .await?;

    Ok(Json(ProgressResponse {
        roadmap_id: roadmap.id,
        progress,
    }))
}
