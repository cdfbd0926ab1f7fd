//! Culture explorer — a themed chatbot demo with text-to-speech playback.

pub mod client;
pub mod handlers;
pub mod store;

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest text the TTS endpoint accepts in one request.
const MAX_TTS_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Message {
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            audio_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Culture {
    pub key: &'static str,
    pub name: &'static str,
    pub greeting: &'static str,
    /// BCP-47 language tag used for speech playback.
    pub voice_lang: &'static str,
    #[serde(skip)]
    topics: &'static [(&'static str, &'static str)],
    #[serde(skip)]
    fallback: &'static str,
}

pub const CULTURES: &[Culture] = &[
    Culture {
        key: "japan",
        name: "Japan",
        greeting: "Konnichiwa! Ask me about Japanese food, festivals or traditions.",
        voice_lang: "ja",
        topics: &[
            ("food", "Washoku, traditional Japanese cuisine, balances rice, soup and seasonal side dishes."),
            ("tea", "The tea ceremony, chanoyu, is a ritual of preparing matcha with mindful precision."),
            ("festival", "Hanami is the spring custom of picnicking under blooming cherry blossoms."),
            ("language", "Japanese mixes three scripts: hiragana, katakana and kanji."),
        ],
        fallback: "In Japan, respect and harmony, called wa, shape daily life.",
    },
    Culture {
        key: "mexico",
        name: "Mexico",
        greeting: "¡Hola! Ask me about Mexican food, music or celebrations.",
        voice_lang: "es",
        topics: &[
            ("food", "Mole is a rich sauce that can combine dozens of ingredients, including chocolate and chiles."),
            ("music", "Mariachi bands play violins, trumpets and guitars at celebrations."),
            ("festival", "Día de los Muertos honours loved ones with altars, marigolds and sugar skulls."),
            ("language", "Besides Spanish, Mexico recognises 68 indigenous languages."),
        ],
        fallback: "Family and community gatherings are at the heart of Mexican culture.",
    },
    Culture {
        key: "india",
        name: "India",
        greeting: "Namaste! Ask me about Indian food, festivals or languages.",
        voice_lang: "hi",
        topics: &[
            ("food", "Indian cuisine varies by region, from dosa in the south to biryani in the north."),
            ("festival", "Diwali, the festival of lights, celebrates the victory of light over darkness."),
            ("music", "Classical Indian music is built on ragas, melodic frameworks for improvisation."),
            ("language", "India has 22 officially recognised languages."),
        ],
        fallback: "India's diversity spans thousands of years of history and traditions.",
    },
    Culture {
        key: "france",
        name: "France",
        greeting: "Bonjour ! Ask me about French food, art or traditions.",
        voice_lang: "fr",
        topics: &[
            ("food", "A traditional French meal moves from apéritif to dessert over several courses."),
            ("art", "The Louvre in Paris is the world's most visited art museum."),
            ("festival", "Bastille Day on 14 July is celebrated with parades and fireworks."),
            ("language", "French is spoken on five continents by more than 300 million people."),
        ],
        fallback: "The French art de vivre values good food, conversation and culture.",
    },
];

pub fn find_culture(key: &str) -> Option<&'static Culture> {
    CULTURES.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

impl Culture {
    pub fn greeting_message(&self) -> Message {
        Message::new(self.greeting, Sender::Bot)
    }

    /// Themed answer picked by the first topic keyword found in the user's text.
    pub fn reply_text(&self, user_text: &str) -> &'static str {
        let text = user_text.to_lowercase();
        self.topics
            .iter()
            .find(|(topic, _)| text.contains(topic))
            .map_or(self.fallback, |(_, answer)| *answer)
    }

    pub fn bot_reply(&self, user_text: &str, tts_base_url: &str) -> Message {
        let content = self.reply_text(user_text);
        Message {
            audio_url: tts_url(tts_base_url, self.voice_lang, content),
            ..Message::new(content, Sender::Bot)
        }
    }
}

/// Builds a speech playback URL; `None` if the base URL is unusable.
pub fn tts_url(base_url: &str, lang: &str, text: &str) -> Option<String> {
    let text: String = text.chars().take(MAX_TTS_CHARS).collect();
    Url::parse_with_params(
        base_url,
        &[
            ("ie", "UTF-8"),
            ("client", "tw-ob"),
            ("tl", lang),
            ("q", text.as_str()),
        ],
    )
    .ok()
    .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_culture_ignores_case() {
        assert_eq!(find_culture("JAPAN").map(|c| c.name), Some("Japan"));
        assert!(find_culture("atlantis").is_none());
    }

    #[test]
    fn test_reply_by_topic() {
        let japan = find_culture("japan").unwrap();
        assert!(japan.reply_text("What FOOD do people eat?").contains("Washoku"));
        assert!(japan.reply_text("tell me about tea").contains("matcha"));
        assert_eq!(japan.reply_text("weather?"), japan.fallback);
    }

    #[test]
    fn test_bot_reply_has_audio() {
        let mexico = find_culture("mexico").unwrap();
        let reply = mexico.bot_reply("music", "https://tts.example.com/speak");
        assert_eq!(reply.sender, Sender::Bot);
        let url = reply.audio_url.unwrap();
        assert!(url.starts_with("https://tts.example.com/speak?"));
        assert!(url.contains("tl=es"));
        assert!(url.contains("q=Mariachi"));
    }

    #[test]
    fn test_tts_url_truncates_and_rejects_bad_base() {
        let long = "a".repeat(500);
        let url = tts_url("https://tts.example.com/", "fr", &long).unwrap();
        assert!(url.ends_with(&"a".repeat(MAX_TTS_CHARS)));
        assert!(!url.ends_with(&"a".repeat(MAX_TTS_CHARS + 1)));
        assert!(tts_url("not a url", "fr", "x").is_none());
    }

    #[test]
    fn test_message_json_uses_audio_url_camel_case() {
        let mut m = Message::new("hi", Sender::User);
        m.audio_url = Some("u".to_string());
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["audioUrl"], "u");
        assert_eq!(json["sender"], "user");
    }
}
