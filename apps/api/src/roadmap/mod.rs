// Career roadmaps: data model, LLM generation, progress tracking and samples.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod prompts;
pub mod samples;
