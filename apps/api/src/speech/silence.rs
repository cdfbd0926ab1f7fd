//! Silence-triggered submission of a spoken transcript.
//!
//! Audio arrives as FFT byte frames (0–255 per frequency bin, one frame per
//! animation tick). A frame's mean amplitude is converted to approximate dB
//! relative to full scale. Once the level has stayed below the threshold for a
//! continuous window, the transcript gathered so far is submitted. Any louder
//! frame or any new transcript token restarts the window.

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const SILENCE_THRESHOLD_DB: f64 = -45.0;
pub const SILENCE_WINDOW: Duration = Duration::from_millis(1500);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Speech recognition is not supported on this device")]
    Unsupported,

    #[error("Not listening")]
    NotListening,
}

/// Mean of the FFT bins. 0.0 for an empty frame.
pub fn mean_amplitude(frame: &[u8]) -> f64 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum: u64 = frame.iter().map(|&b| u64::from(b)).sum();
    sum as f64 / frame.len() as f64
}

/// Converts a mean byte amplitude to dB full scale. Silence is `-inf`.
pub fn amplitude_to_db(mean: f64) -> f64 {
    20.0 * (mean / 255.0).log10()
}

#[derive(Debug, Clone)]
pub struct SilenceDetector {
    threshold_db: f64,
    window: Duration,
    quiet_since: Option<Instant>,
}

impl Default for SilenceDetector {
    fn default() -> Self {
        Self::new(SILENCE_THRESHOLD_DB, SILENCE_WINDOW)
    }
}

impl SilenceDetector {
    pub fn new(threshold_db: f64, window: Duration) -> Self {
        Self {
            threshold_db,
            window,
            quiet_since: None,
        }
    }

    /// Feeds one FFT frame. Returns true once the level has been below the
    /// threshold for the whole window.
    pub fn sample(&mut self, frame: &[u8], now: Instant) -> bool {
        let db = amplitude_to_db(mean_amplitude(frame));
        if db >= self.threshold_db {
            self.quiet_since = None;
            return false;
        }

        let since = *self.quiet_since.get_or_insert(now);
        now.saturating_duration_since(since) >= self.window
    }

    /// Speech activity seen elsewhere (e.g. a new transcript token).
    pub fn reset(&mut self) {
        self.quiet_since = None;
    }
}

/// What happened after feeding an input to a [`SpeechSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "transcript", rename_all = "snake_case")]
pub enum SpeechEvent {
    Listening,
    Submitted(String),
}

/// One listening session: accumulates transcript tokens and submits them once
/// the speaker goes quiet.
#[derive(Debug, Clone)]
pub struct SpeechSession {
    detector: SilenceDetector,
    transcript: String,
    listening: bool,
}

impl SpeechSession {
    /// Fails when the platform offers no speech recognition; callers render the
    /// control disabled.
    pub fn start(recognition_supported: bool) -> Result<Self, SpeechError> {
        Self::with_detector(recognition_supported, SilenceDetector::default())
    }

    pub fn with_detector(
        recognition_supported: bool,
        detector: SilenceDetector,
    ) -> Result<Self, SpeechError> {
        if !recognition_supported {
            return Err(SpeechError::Unsupported);
        }
        Ok(Self {
            detector,
            transcript: String::new(),
            listening: true,
        })
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn push_token(&mut self, token: &str) -> Result<(), SpeechError> {
        if !self.listening {
            return Err(SpeechError::NotListening);
        }
        let token = token.trim();
        if token.is_empty() {
            return Ok(());
        }
        if !self.transcript.is_empty() {
            self.transcript.push(' ');
        }
        self.transcript.push_str(token);
        self.detector.reset();
        Ok(())
    }

    /// Feeds one audio frame. Quiet with nothing said yet keeps listening.
    pub fn push_frame(&mut self, frame: &[u8], now: Instant) -> Result<SpeechEvent, SpeechError> {
        if !self.listening {
            return Err(SpeechError::NotListening);
        }
        if !self.detector.sample(frame, now) {
            return Ok(SpeechEvent::Listening);
        }
        if self.transcript.is_empty() {
            self.detector.reset();
            return Ok(SpeechEvent::Listening);
        }
        Ok(SpeechEvent::Submitted(self.finish()))
    }

    /// Manual stop: finalizes whatever was heard.
    pub fn stop(&mut self) -> Option<String> {
        if !self.listening || self.transcript.is_empty() {
            self.listening = false;
            return None;
        }
        Some(self.finish())
    }

    fn finish(&mut self) -> String {
        self.listening = false;
        let transcript = std::mem::take(&mut self.transcript);
        debug!(chars = transcript.len(), "Submitting transcript after silence");
        transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: [u8; 4] = [0, 0, 1, 0];
    const LOUD: [u8; 4] = [120, 90, 200, 60];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_amplitude_and_db() {
        assert_eq!(mean_amplitude(&[]), 0.0);
        assert_eq!(mean_amplitude(&[10, 20, 30]), 20.0);
        assert!((amplitude_to_db(255.0)).abs() < 1e-9);
        assert!(amplitude_to_db(0.0).is_infinite());
        assert!(amplitude_to_db(mean_amplitude(&QUIET)) < SILENCE_THRESHOLD_DB);
        assert!(amplitude_to_db(mean_amplitude(&LOUD)) > SILENCE_THRESHOLD_DB);
    }

    #[test]
    fn test_no_trigger_before_window() {
        let t0 = Instant::now();
        let mut d = SilenceDetector::default();
        assert!(!d.sample(&QUIET, t0));
        assert!(!d.sample(&QUIET, t0 + ms(1000)));
        assert!(!d.sample(&QUIET, t0 + ms(1499)));
        assert!(d.sample(&QUIET, t0 + ms(1500)));
    }

    #[test]
    fn test_loud_sample_resets_window() {
        let t0 = Instant::now();
        let mut d = SilenceDetector::default();
        d.sample(&QUIET, t0);
        d.sample(&QUIET, t0 + ms(1400));
        assert!(!d.sample(&LOUD, t0 + ms(1450)));
        assert!(!d.sample(&QUIET, t0 + ms(1500)));
        assert!(!d.sample(&QUIET, t0 + ms(2999)));
        assert!(d.sample(&QUIET, t0 + ms(3000)));
    }

    #[test]
    fn test_unsupported_platform_cannot_start() {
        assert_eq!(SpeechSession::start(false).unwrap_err(), SpeechError::Unsupported);
    }

    #[test]
    fn test_session_submits_after_silence() {
        let t0 = Instant::now();
        let mut s = SpeechSession::start(true).unwrap();
        s.push_token("tell me about").unwrap();
        s.push_token(" Japanese tea ").unwrap();

        assert_eq!(s.push_frame(&QUIET, t0).unwrap(), SpeechEvent::Listening);
        assert_eq!(s.push_frame(&QUIET, t0 + ms(800)).unwrap(), SpeechEvent::Listening);
        assert_eq!(
            s.push_frame(&QUIET, t0 + ms(1500)).unwrap(),
            SpeechEvent::Submitted("tell me about Japanese tea".to_string())
        );
        assert!(!s.is_listening());
        assert_eq!(s.push_frame(&QUIET, t0 + ms(1600)), Err(SpeechError::NotListening));
    }

    #[test]
    fn test_new_token_resets_window() {
        let t0 = Instant::now();
        let mut s = SpeechSession::start(true).unwrap();
        s.push_token("hello").unwrap();
        s.push_frame(&QUIET, t0).unwrap();
        s.push_frame(&QUIET, t0 + ms(1000)).unwrap();
        s.push_token("there").unwrap();
        assert_eq!(s.push_frame(&QUIET, t0 + ms(1600)).unwrap(), SpeechEvent::Listening);
        assert!(matches!(
            s.push_frame(&QUIET, t0 + ms(3100)).unwrap(),
            SpeechEvent::Submitted(ref t) if t == "hello there"
        ));
    }

    #[test]
    fn test_silence_without_words_keeps_listening() {
        let t0 = Instant::now();
        let mut s = SpeechSession::start(true).unwrap();
        assert_eq!(s.push_frame(&QUIET, t0).unwrap(), SpeechEvent::Listening);
        assert_eq!(s.push_frame(&QUIET, t0 + ms(2000)).unwrap(), SpeechEvent::Listening);
        assert!(s.is_listening());
    }

    #[test]
    fn test_stop_returns_partial_transcript() {
        let mut s = SpeechSession::start(true).unwrap();
        assert_eq!(s.stop(), None);

        let mut s = SpeechSession::start(true).unwrap();
        s.push_token("partial").unwrap();
        assert_eq!(s.stop(), Some("partial".to_string()));
        assert!(!s.is_listening());
    }
}
