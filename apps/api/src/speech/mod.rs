// Voice input helpers for the culture explorer and coach chats.

pub mod handlers;
pub mod silence;

pub use silence::{SilenceDetector, SpeechError, SpeechEvent, SpeechSession};
