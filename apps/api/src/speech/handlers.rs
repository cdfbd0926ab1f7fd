//! Axum route handlers for voice input.

use std::time::{Duration, Instant};

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::speech::{SpeechEvent, SpeechSession};

/// One captured input, in arrival order.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeechInput {
    /// A recognized transcript fragment.
    Token { text: String },
    /// An FFT byte frame, `at_ms` after the session started.
    Frame { bins: Vec<u8>, at_ms: u64 },
    /// The user pressed stop.
    Stop,
}

#[derive(Debug, Deserialize)]
pub struct ReplayRequest {
    pub recognition_supported: bool,
    pub inputs: Vec<SpeechInput>,
}

#[derive(Debug, Serialize)]
pub struct ReplayResponse {
    /// One entry per frame processed.
    pub events: Vec<SpeechEvent>,
    pub submitted: Option<String>,
    pub listening: bool,
}

/// POST /api/v1/speech/replay
///
/// Runs captured tokens and audio frames through a listening session. Inputs
/// after the session has ended are ignored.
pub async fn handle_replay(
    Json(request): Json<ReplayRequest>,
) -> Result<Json<ReplayResponse>, AppError> {
    let mut session = SpeechSession::start(request.recognition_supported)?;
    let started = Instant::now();
    let mut events = Vec::new();
    let mut submitted = None;

    for input in &request.inputs {
        if !session.is_listening() {
            break;
        }
        match input {
            SpeechInput::Token { text } => session.push_token(text)?,
            SpeechInput::Frame { bins, at_ms } => {
                let event = session.push_frame(bins, started + Duration::from_millis(*at_ms))?;
                if let SpeechEvent::Submitted(transcript) = &event {
                    submitted = Some(transcript.clone());
                }
                events.push(event);
            }
            SpeechInput::Stop => submitted = session.stop(),
        }
    }

    Ok(Json(ReplayResponse {
        events,
        submitted,
        listening: session.is_listening(),
    }))
}
