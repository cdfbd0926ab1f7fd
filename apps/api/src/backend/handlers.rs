//! Axum route handlers for auth, profile and dashboard — thin forwards to the
//! roadmap backend.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::backend::auth::BearerToken;
use crate::backend::dashboard::{summarize, DashboardSummary};
use crate::backend::{BackendError, Credentials, Dashboard, LoginResponse, RegisterRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub summary: DashboardSummary,
}

fn require_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    Ok(())
}

/// A 401 on the profile or dashboard fetch means the session is gone.
fn session_error(err: BackendError) -> AppError {
    match err {
        BackendError::Unauthorized(_) => AppError::Unauthorized,
        other => other.into(),
    }
}

/// POST /api/v1/auth/login
///
/// Rejected credentials come back as `AUTH_FAILED` with the backend's message.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    require_credentials(&credentials.email, &credentials.password)?;
    let login = state.backend.login(&credentials).await?;
    info!("User logged in");
    Ok(Json(login))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    require_credentials(&request.email, &request.password)?;
    Ok(Json(state.backend.register(&request).await?))
}

/// GET /api/v1/profile
///
/// A 401 from the backend surfaces as `Unauthorized` with a `/login` redirect.
pub async fn handle_profile(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Value>, AppError> {
    let profile = state
        .backend
        .profile(token.as_str())
        .await
        .map_err(session_error)?;
    Ok(Json(profile))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<DashboardResponse>, AppError> {
    let dashboard = state
        .backend
        .dashboard(token.as_str())
        .await
        .map_err(session_error)?;
    let summary = summarize(&dashboard);
    Ok(Json(DashboardResponse { dashboard, summary }))
}
