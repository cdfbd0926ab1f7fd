//! Roadmap generation — prompt building, LLM call and shape validation.
//!
//! `AppState` holds an `Arc<dyn RoadmapGenerator>`; the Groq-backed
//! implementation is the default, tests swap in canned generators.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::roadmap::models::{Resource, Roadmap, RoadmapStep};
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

/// A malformed response is asked for again once before giving up.
const MAX_GENERATION_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub career: String,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub timeframe_months: Option<u32>,
}

/// The roadmap as the model returns it: no id, no completion state.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRoadmap {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<GeneratedStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedStep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRoadmapRequest) -> Result<Roadmap, AppError>;
}

pub struct GroqRoadmapGenerator(pub LlmClient);

#[async_trait]
impl RoadmapGenerator for GroqRoadmapGenerator {
    async fn generate(&self, request: &GenerateRoadmapRequest) -> Result<Roadmap, AppError> {
        let prompt = build_prompt(request);

        let mut last_problem = String::new();
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            match self
                .0
                .call_json::<GeneratedRoadmap>(&prompt, ROADMAP_SYSTEM)
                .await
            {
                Ok(generated) => match validate_shape(&generated) {
                    Ok(()) => {
                        let roadmap = into_roadmap(generated);
                        info!(
                            career = %request.career,
                            steps = roadmap.steps.len(),
                            "Roadmap generated"
                        );
                        return Ok(roadmap);
                    }
                    Err(problem) => {
                        warn!(attempt, "Generated roadmap failed shape check: {problem}");
                        last_problem = problem;
                    }
                },
                Err(LlmError::Parse(e)) => {
                    warn!(attempt, "Generated roadmap was not valid JSON: {e}");
                    last_problem = e.to_string();
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::Llm(format!(
            "model output rejected after {MAX_GENERATION_ATTEMPTS} attempts: {last_problem}"
        )))
    }
}

pub fn build_prompt(request: &GenerateRoadmapRequest) -> String {
    let experience = request
        .experience_level
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or("beginner");
    let interests = if request.interests.is_empty() {
        "none specified".to_string()
    } else {
        request.interests.join(", ")
    };
    let timeframe = match request.timeframe_months {
        Some(m) => format!("{m} months"),
        None => "flexible".to_string(),
    };

    ROADMAP_PROMPT_TEMPLATE
        .replace("{career}", request.career.trim())
        .replace("{experience}", experience)
        .replace("{interests}", &interests)
        .replace("{timeframe}", &timeframe)
}

/// Rejects model output the map view cannot render.
pub fn validate_shape(generated: &GeneratedRoadmap) -> Result<(), String> {
    if generated.title.trim().is_empty() {
        return Err("roadmap has no title".to_string());
    }
    if generated.steps.is_empty() {
        return Err("roadmap has no steps".to_string());
    }
    if let Some(i) = generated.steps.iter().position(|s| s.title.trim().is_empty()) {
        return Err(format!("step {i} has no title"));
    }
    Ok(())
}

pub fn into_roadmap(generated: GeneratedRoadmap) -> Roadmap {
    Roadmap {
        id: Uuid::new_v4().to_string(),
        title: generated.title.trim().to_string(),
        description: generated.description,
        steps: generated
            .steps
            .into_iter()
            .map(|s| RoadmapStep {
                title: s.title.trim().to_string(),
                description: s.description,
                section: s.section.filter(|v| !v.trim().is_empty()),
                icon: s.icon,
                resources: s.resources,
                tips: s.tips,
                completed: false,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerateRoadmapRequest {
        GenerateRoadmapRequest {
            career: "  Data Scientist ".to_string(),
            experience_level: None,
            interests: vec!["statistics".to_string(), "python".to_string()],
            timeframe_months: Some(12),
        }
    }

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content": content}}]
        }))
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("become a Data Scientist."));
        assert!(prompt.contains("experience level: beginner"));
        assert!(prompt.contains("statistics, python"));
        assert!(prompt.contains("12 months"));
        assert!(!prompt.contains("{career}"));
        assert!(!prompt.contains("{timeframe}"));
    }

    #[test]
    fn test_shape_check_rejects_untitled_step() {
        let generated: GeneratedRoadmap = serde_json::from_str(
            r#"{"title": "T", "steps": [{"title": "A"}, {"title": " "}]}"#,
        )
        .unwrap();
        assert_eq!(validate_shape(&generated), Err("step 1 has no title".to_string()));
    }

    #[test]
    fn test_shape_check_rejects_empty_steps() {
        let generated: GeneratedRoadmap = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert!(validate_shape(&generated).is_err());
    }

    #[test]
    fn test_into_roadmap_starts_uncompleted() {
        let generated: GeneratedRoadmap = serde_json::from_str(
            r#"{"title": " T ", "steps": [{"title": "A", "section": ""}]}"#,
        )
        .unwrap();
        let roadmap = into_roadmap(generated);
        assert_eq!(roadmap.title, "T");
        assert!(!roadmap.steps[0].completed);
        assert!(roadmap.steps[0].section.is_none());
        assert!(Uuid::parse_str(&roadmap.id).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_output_is_retried_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(r#"{"title": "", "steps": []}"#))
            .expect(2)
            .mount(&server)
            .await;

        let generator =
            GroqRoadmapGenerator(LlmClient::with_endpoint("k".to_string(), server.uri()));
        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("no title")));
    }

    #[tokio::test]
    async fn test_valid_output_becomes_roadmap() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(
                r#"{"title": "Data Scientist", "description": "d",
                    "steps": [{"title": "Python", "section": "Foundations"},
                              {"title": "Statistics", "section": "Foundations"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let generator =
            GroqRoadmapGenerator(LlmClient::with_endpoint("k".to_string(), server.uri()));
        let roadmap = generator.generate(&request()).await.unwrap();
        assert_eq!(roadmap.steps.len(), 2);
        assert_eq!(roadmap.progress().completed, 0);
    }
}
