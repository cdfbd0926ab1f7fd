//! Mock career coach: keyword-matched canned replies.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FALLBACK_REPLY: &str = "That's a great question! Tell me a bit more about your \
    current role and where you'd like to be in a year, and I'll suggest next steps.";

/// (keywords, reply). First entry with any matching keyword wins.
const REPLIES: &[(&[&str], &str)] = &[
    (
        &["resume", "cv"],
        "Keep your resume to one page, lead each bullet with an action verb and \
         quantify your impact wherever you can.",
    ),
    (
        &["interview"],
        "Practise the STAR method (Situation, Task, Action, Result) and prepare \
         two or three stories that show how you solve problems.",
    ),
    (
        &["salary", "negotiat", "pay"],
        "Research market rates for the role, anchor with a specific number and \
         remember that benefits and growth are negotiable too.",
    ),
    (
        &["switch", "change career", "transition"],
        "Map the skills you already have onto the new field, then close the gaps \
         with a small project you can show. A roadmap is a good place to start.",
    ),
    (
        &["learn", "course", "skill"],
        "Pick one skill at a time, learn it by building something real and share \
         what you made. Consistency beats intensity.",
    ),
    (
        &["network", "linkedin", "connect"],
        "Reach out to people doing the job you want with a short, specific \
         question. Most people are happy to share fifteen minutes.",
    ),
    (
        &["hello", "hi ", "hey"],
        "Hi! I'm your career coach. Ask me about resumes, interviews, learning new \
         skills or changing careers.",
    ),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachReply {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

pub fn reply_text(message: &str) -> &'static str {
    // Padding lets "hi " match a bare greeting.
    let message = format!("{} ", message.to_lowercase());
    REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map_or(FALLBACK_REPLY, |(_, reply)| *reply)
}

pub fn reply(message: &str) -> CoachReply {
    CoachReply {
        id: Uuid::new_v4(),
        content: reply_text(message).to_string(),
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_reply() {
        assert!(reply_text("How do I prepare for an INTERVIEW?").contains("STAR"));
        assert!(reply_text("can you review my CV").contains("one page"));
    }

    #[test]
    fn test_first_match_wins() {
        // "resume" appears before "interview" in the table.
        assert!(reply_text("resume tips for my interview").contains("one page"));
    }

    #[test]
    fn test_bare_greeting() {
        assert!(reply_text("hi").contains("career coach"));
        assert!(!reply_text("this is fine").contains("career coach"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(reply_text("what's the weather"), FALLBACK_REPLY);
    }
}
