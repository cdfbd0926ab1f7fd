//! Axum route handlers for the map view.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::map::layout::{layout_roadmap, SectionLayout};
use crate::map::transform::{MapEvent, MapTransform};
use crate::roadmap::models::Roadmap;

#[derive(Debug, Serialize)]
pub struct MapLayoutResponse {
    pub roadmap_id: String,
    pub sections: Vec<SectionLayout>,
}

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    /// Starts from the default view when omitted.
    #[serde(default)]
    pub state: Option<MapTransform>,
    pub events: Vec<MapEvent>,
}

/// POST /api/v1/map/layout
///
/// Lays out every section of the given roadmap.
pub async fn handle_layout(Json(roadmap): Json<Roadmap>) -> Result<Json<MapLayoutResponse>, AppError> {
    if roadmap.steps.is_empty() {
        return Err(AppError::Validation("roadmap has no steps to lay out".to_string()));
    }

    Ok(Json(MapLayoutResponse {
        sections: layout_roadmap(&roadmap),
        roadmap_id: roadmap.id,
    }))
}

/// POST /api/v1/map/transform
///
/// Replays pointer/zoom/section events and returns the resulting view state.
pub async fn handle_transform(Json(request): Json<TransformRequest>) -> Json<MapTransform> {
    let mut transform = request.state.unwrap_or_default();
    for event in &request.events {
        transform.apply(event);
    }
    Json(transform)
}
