pub mod backend;
pub mod coach;
pub mod config;
pub mod culture;
pub mod errors;
pub mod llm_client;
pub mod map;
pub mod personality;
pub mod professions;
pub mod roadmap;
pub mod routes;
pub mod speech;
pub mod state;
