//! Profession directory — static catalogue with search and filtering.

pub mod handlers;

use serde::Serialize;

use crate::personality::Category;

#[derive(Debug, Clone, Serialize)]
pub struct Profession {
    pub slug: &'static str,
    pub title: &'static str,
    /// Directory grouping shown as a filter chip, e.g. "Technology".
    pub field: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub salary_range: (u32, u32),
    pub outlook: &'static str,
    /// Personality categories this profession suits.
    pub traits: &'static [Category],
}

pub const PROFESSIONS: &[Profession] = &[
    Profession {
        slug: "software-engineer",
        title: "Software Engineer",
        field: "Technology",
        description: "Designs, builds and maintains software systems.",
        skills: &["Programming", "Algorithms", "Git", "Testing"],
        salary_range: (70_000, 160_000),
        outlook: "Growing",
        traits: &[Category::Analytical, Category::Practical],
    },
    Profession {
        slug: "data-scientist",
        title: "Data Scientist",
        field: "Technology",
        description: "Extracts insight from data using statistics and machine learning.",
        skills: &["Python", "Statistics", "SQL", "Machine Learning"],
        salary_range: (80_000, 170_000),
        outlook: "Growing",
        traits: &[Category::Analytical],
    },
    Profession {
        slug: "ux-designer",
        title: "UX Designer",
        field: "Design",
        description: "Researches user needs and designs usable digital products.",
        skills: &["User Research", "Wireframing", "Prototyping", "Figma"],
        salary_range: (60_000, 130_000),
        outlook: "Growing",
        traits: &[Category::Creative, Category::Social],
    },
    Profession {
        slug: "graphic-designer",
        title: "Graphic Designer",
        field: "Design",
        description: "Creates visual concepts for brands, print and digital media.",
        skills: &["Typography", "Illustration", "Branding", "Adobe Creative Suite"],
        salary_range: (40_000, 90_000),
        outlook: "Stable",
        traits: &[Category::Creative],
    },
    Profession {
        slug: "teacher",
        title: "Teacher",
        field: "Education",
        description: "Plans lessons and helps students learn and grow.",
        skills: &["Communication", "Lesson Planning", "Classroom Management"],
        salary_range: (35_000, 75_000),
        outlook: "Stable",
        traits: &[Category::Social],
    },
    Profession {
        slug: "nurse",
        title: "Registered Nurse",
        field: "Healthcare",
        description: "Provides and coordinates patient care in clinical settings.",
        skills: &["Patient Care", "Clinical Assessment", "Empathy"],
        salary_range: (55_000, 110_000),
        outlook: "Growing",
        traits: &[Category::Social, Category::Practical],
    },
    Profession {
        slug: "product-manager",
        title: "Product Manager",
        field: "Business",
        description: "Decides what to build and aligns teams around a product vision.",
        skills: &["Roadmapping", "Stakeholder Management", "Analytics", "Communication"],
        salary_range: (85_000, 180_000),
        outlook: "Growing",
        traits: &[Category::Leadership, Category::Analytical],
    },
    Profession {
        slug: "entrepreneur",
        title: "Entrepreneur",
        field: "Business",
        description: "Starts and grows a business, taking on its risks and rewards.",
        skills: &["Sales", "Fundraising", "Leadership", "Negotiation"],
        salary_range: (0, 250_000),
        outlook: "Variable",
        traits: &[Category::Leadership, Category::Creative],
    },
    Profession {
        slug: "electrician",
        title: "Electrician",
        field: "Trades",
        description: "Installs and repairs electrical systems in buildings.",
        skills: &["Wiring", "Blueprint Reading", "Safety Codes"],
        salary_range: (45_000, 95_000),
        outlook: "Growing",
        traits: &[Category::Practical],
    },
    Profession {
        slug: "financial-analyst",
        title: "Financial Analyst",
        field: "Finance",
        description: "Evaluates investments and builds financial models.",
        skills: &["Excel", "Financial Modelling", "Accounting", "Forecasting"],
        salary_range: (60_000, 140_000),
        outlook: "Stable",
        traits: &[Category::Analytical, Category::Practical],
    },
];

/// Case-insensitive search over title, description and skills, optionally
/// restricted to one field. Blank query and no field returns everything.
pub fn search(query: &str, field: Option<&str>) -> Vec<&'static Profession> {
    let query = query.trim().to_lowercase();
    let field = field.map(str::trim).filter(|f| !f.is_empty());

    PROFESSIONS
        .iter()
        .filter(|p| field.map_or(true, |f| p.field.eq_ignore_ascii_case(f)))
        .filter(|p| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.skills.iter().any(|s| s.to_lowercase().contains(&query))
        })
        .collect()
}

pub fn find(slug: &str) -> Option<&'static Profession> {
    PROFESSIONS.iter().find(|p| p.slug == slug)
}

/// Directory fields in first-appearance order.
pub fn fields() -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = Vec::new();
    for p in PROFESSIONS {
        if !fields.contains(&p.field) {
            fields.push(p.field);
        }
    }
    fields
}

/// Professions suited to a personality category, primary trait first.
pub fn matching(category: Category) -> Vec<&'static Profession> {
    let mut matches: Vec<&'static Profession> = PROFESSIONS
        .iter()
        .filter(|p| p.traits.contains(&category))
        .collect();
    matches.sort_by_key(|p| p.traits.iter().position(|&t| t == category));
    matches
}
