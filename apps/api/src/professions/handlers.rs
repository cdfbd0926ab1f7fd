//! Axum route handlers for the profession directory.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::professions::{fields, find, search, Profession};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfessionListResponse {
    pub professions: Vec<&'static Profession>,
    pub fields: Vec<&'static str>,
}

/// GET /api/v1/professions?q=&field=
pub async fn handle_list(Query(params): Query<SearchQuery>) -> Json<ProfessionListResponse> {
    Json(ProfessionListResponse {
        professions: search(&params.q, params.field.as_deref()),
        fields: fields(),
    })
}

/// GET /api/v1/professions/:slug
pub async fn handle_get(Path(slug): Path<String>) -> Result<Json<&'static Profession>, AppError> {
    find(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profession '{slug}' not found")))
}
