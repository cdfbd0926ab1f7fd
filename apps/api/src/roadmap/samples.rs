//! Built-in sample roadmaps shown before a user has generated their own.

use crate::roadmap::models::{Roadmap, RoadmapStep};

struct SampleRoadmap {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    /// (section, title, description)
    steps: &'static [(&'static str, &'static str, &'static str)],
}

const SAMPLES: &[SampleRoadmap] = &[
    SampleRoadmap {
        id: "frontend-developer",
        title: "Frontend Developer",
        description: "From your first HTML page to shipping production web apps.",
        steps: &[
            ("Foundations", "HTML & CSS", "Semantic markup, layout with flexbox and grid."),
            ("Foundations", "JavaScript", "Language fundamentals, the DOM and async code."),
            ("Foundations", "Git", "Version control and collaborating through pull requests."),
            ("Frameworks", "React", "Components, state, hooks and data fetching."),
            ("Frameworks", "TypeScript", "Static types for larger codebases."),
            ("Professional", "Testing", "Unit and end-to-end tests for UI code."),
            ("Professional", "Portfolio", "Publish three projects and write about them."),
        ],
    },
    SampleRoadmap {
        id: "data-analyst",
        title: "Data Analyst",
        description: "Turn raw data into decisions with SQL, spreadsheets and dashboards.",
        steps: &[
            ("Foundations", "Spreadsheets", "Formulas, pivot tables and cleaning data."),
            ("Foundations", "Statistics", "Descriptive statistics, distributions and sampling."),
            ("Tools", "SQL", "Joins, aggregation and window functions."),
            ("Tools", "Python", "pandas for analysis and matplotlib for charts."),
            ("Communication", "Dashboards", "Build dashboards stakeholders actually use."),
            ("Communication", "Storytelling", "Present findings as a clear narrative."),
        ],
    },
    SampleRoadmap {
        id: "ux-designer",
        title: "UX Designer",
        description: "Research, prototype and test experiences people enjoy.",
        steps: &[
            ("Foundations", "Design Principles", "Hierarchy, contrast, typography and colour."),
            ("Research", "User Research", "Interviews, surveys and usability testing."),
            ("Research", "Personas & Journeys", "Model users and map their journeys."),
            ("Craft", "Wireframing", "Low-fidelity sketches and information architecture."),
            ("Craft", "Prototyping", "Interactive prototypes in a design tool."),
            ("Career", "Case Studies", "Document your process in a portfolio."),
        ],
    },
    SampleRoadmap {
        id: "cloud-engineer",
        title: "Cloud Engineer",
        description: "Operate reliable infrastructure on a major cloud provider.",
        steps: &[
            ("Foundations", "Linux", "Shell, processes, permissions and networking basics."),
            ("Foundations", "Networking", "IP, DNS, load balancing and TLS."),
            ("Platform", "Cloud Fundamentals", "Compute, storage and identity on one provider."),
            ("Platform", "Containers", "Docker images and Kubernetes workloads."),
            ("Automation", "Infrastructure as Code", "Terraform modules and state management."),
            ("Automation", "CI/CD", "Pipelines that build, test and deploy."),
            ("Career", "Certification", "Earn an associate-level cloud certification."),
        ],
    },
];

pub fn sample_roadmaps() -> Vec<Roadmap> {
    SAMPLES.iter().map(to_roadmap).collect()
}

/// Case-insensitive substring search over sample titles, descriptions and step titles.
/// An empty query returns every sample.
pub fn search_samples(query: &str) -> Vec<Roadmap> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return sample_roadmaps();
    }

    SAMPLES
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&query)
                || s.description.to_lowercase().contains(&query)
                || s.steps
                    .iter()
                    .any(|(_, title, _)| title.to_lowercase().contains(&query))
        })
        .map(to_roadmap)
        .collect()
}

fn to_roadmap(sample: &SampleRoadmap) -> Roadmap {
    Roadmap {
        id: sample.id.to_string(),
        title: sample.title.to_string(),
        description: sample.description.to_string(),
        steps: sample
            .steps
            .iter()
            .map(|(section, title, description)| RoadmapStep {
                title: title.to_string(),
                description: description.to_string(),
                section: Some(section.to_string()),
                icon: None,
                resources: vec![],
                tips: vec![],
                completed: false,
            })
            .collect(),
    }
}
