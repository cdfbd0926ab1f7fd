pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::backend::handlers as account;
use crate::state::AppState;
use crate::{coach, culture, map, personality, professions, roadmap, speech};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth, profile, dashboard (forwarded to the roadmap backend)
        .route("/api/v1/auth/login", post(account::handle_login))
        .route("/api/v1/auth/register", post(account::handle_register))
        .route("/api/v1/profile", get(account::handle_profile))
        .route("/api/v1/dashboard", get(account::handle_dashboard))
        // Roadmaps
        .route(
            "/api/v1/roadmaps",
            get(roadmap::handlers::handle_list).post(roadmap::handlers::handle_create),
        )
        .route(
            "/api/v1/roadmaps/samples",
            get(roadmap::handlers::handle_samples),
        )
        .route(
            "/api/v1/roadmaps/similar",
            get(roadmap::handlers::handle_similar),
        )
        .route(
            "/api/v1/roadmaps/generate",
            post(roadmap::handlers::handle_generate),
        )
        .route(
            "/api/v1/roadmaps/:id",
            get(roadmap::handlers::handle_get).delete(roadmap::handlers::handle_delete),
        )
        .route(
            "/api/v1/roadmaps/:id/progress",
            patch(roadmap::handlers::handle_progress),
        )
        // Map view
        .route("/api/v1/map/layout", post(map::handlers::handle_layout))
        .route("/api/v1/map/transform", post(map::handlers::handle_transform))
        // Voice input
        .route("/api/v1/speech/replay", post(speech::handlers::handle_replay))
        // Personality quiz
        .route(
            "/api/v1/personality/questions",
            get(personality::handlers::handle_questions),
        )
        .route(
            "/api/v1/personality/score",
            post(personality::handlers::handle_score),
        )
        // Profession directory
        .route("/api/v1/professions", get(professions::handlers::handle_list))
        .route(
            "/api/v1/professions/:slug",
            get(professions::handlers::handle_get),
        )
        // Career coach
        .route("/api/v1/coach/chat", post(coach::handlers::handle_chat))
        // Culture explorer
        .route("/api/v1/culture", get(culture::handlers::handle_list))
        .route(
            "/api/v1/culture/:key/messages",
            get(culture::handlers::handle_history)
                .post(culture::handlers::handle_send)
                .delete(culture::handlers::handle_clear),
        )
        .with_state(state)
}
