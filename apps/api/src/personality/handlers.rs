//! Axum route handlers for the personality quiz.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::personality::{evaluate, Answers, PersonalityResult, Question, QUESTIONS};
use crate::professions::{matching, Profession};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Answers,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: PersonalityResult,
    pub suggested_professions: Vec<&'static Profession>,
}

/// GET /api/v1/personality/questions
pub async fn handle_questions() -> Json<&'static [Question]> {
    Json(QUESTIONS)
}

/// POST /api/v1/personality/score
///
/// Reduces answers to per-category means and suggests matching professions.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Result<Json<ScoreResponse>, AppError> {
    let result = evaluate(&request.answers)?;
    let suggested_professions = matching(result.dominant);
    Ok(Json(ScoreResponse {
        result,
        suggested_professions,
    }))
}
