// Prompt constants for roadmap generation.

/// System prompt for roadmap generation — enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str = "You are an experienced career coach who designs \
    practical, step-by-step learning roadmaps. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Roadmap prompt template. Replace `{career}`, `{experience}`, `{interests}`
/// and `{timeframe}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a career roadmap for someone who wants to become a {career}.
Current experience level: {experience}.
Interests to emphasise: {interests}.
Target timeframe: {timeframe}.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Frontend Developer Roadmap",
  "description": "One or two sentences describing the journey.",
  "steps": [
    {
      "title": "Learn HTML & CSS",
      "description": "What to learn in this step and why it matters.",
      "section": "Foundations",
      "icon": "code",
      "resources": [
        {"title": "MDN Web Docs", "url": "https://developer.mozilla.org", "type": "documentation"}
      ],
      "tips": ["Build a small personal page while learning."]
    }
  ]
}

Rules:
- Between 6 and 15 steps, ordered from first to last.
- Group steps into 2 to 5 sections; every step must name its section.
- Every step MUST have a non-empty title and description.
- Resources must be real, well-known materials. Omit the url if unsure."#;
