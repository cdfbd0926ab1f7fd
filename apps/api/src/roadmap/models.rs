use serde::{Deserialize, Deserializer, Serialize};

/// Section label for steps that do not name one.
pub const DEFAULT_SECTION: &str = "Roadmap";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    /// "course" | "book" | "video" | "article" ... free-form, as supplied.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A single stage of a roadmap, rendered as a clickable node on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
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
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}

/// Consecutive-or-not steps sharing a section label, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub title: &'a str,
    pub steps: Vec<&'a RoadmapStep>,
}

impl Roadmap {
    /// Groups steps into map sections, keeping the order in which each
    /// section label first appears and the step order within it.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for step in &self.steps {
            let title = step.section.as_deref().unwrap_or(DEFAULT_SECTION);
            match sections.iter_mut().find(|s| s.title == title) {
                Some(section) => section.steps.push(step),
                None => sections.push(Section {
                    title,
                    steps: vec![step],
                }),
            }
        }
        sections
    }
}

/// Backends disagree on whether ids are numbers or strings; accept both.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str, section: Option<&str>) -> RoadmapStep {
        RoadmapStep {
            title: title.to_string(),
            description: String::new(),
            section: section.map(str::to_string),
            icon: None,
            resources: vec![],
            tips: vec![],
            completed: false,
        }
    }

    #[test]
    fn test_numeric_id_and_name_alias() {
        let roadmap: Roadmap =
            serde_json::from_str(r#"{"id": 42, "name": "Data Engineer", "steps": []}"#).unwrap();
        assert_eq!(roadmap.id, "42");
        assert_eq!(roadmap.title, "Data Engineer");
        assert!(roadmap.description.is_empty());
    }

    #[test]
    fn test_step_defaults() {
        let step: RoadmapStep = serde_json::from_str(r#"{"title": "Learn SQL"}"#).unwrap();
        assert!(!step.completed);
        assert!(step.resources.is_empty());
        assert!(step.section.is_none());
    }

    #[test]
    fn test_sections_keep_first_appearance_order() {
        let roadmap = Roadmap {
            id: "r1".to_string(),
            title: "Backend".to_string(),
            description: String::new(),
            steps: vec![
                step("HTTP", Some("Basics")),
                step("Rust", Some("Language")),
                step("DNS", Some("Basics")),
                step("Portfolio", None),
            ],
        };

        let sections = roadmap.sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Basics", "Language", DEFAULT_SECTION]);
        assert_eq!(sections[0].steps.len(), 2);
        assert_eq!(sections[0].steps[1].title, "DNS");
    }
}
