//! Personality quiz — fixed question bank and the per-category score reducer.

pub mod handlers;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Score assumed for a question the user skipped.
pub const NEUTRAL_SCORE: f64 = 3.0;
pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Analytical,
    Creative,
    Social,
    Leadership,
    Practical,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Analytical,
        Category::Creative,
        Category::Social,
        Category::Leadership,
        Category::Practical,
    ];
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
}

const fn q(id: u32, text: &'static str, category: Category) -> Question {
    Question { id, text, category }
}

pub const QUESTIONS: &[Question] = &[
    q(1, "I enjoy solving complex problems with logic.", Category::Analytical),
    q(2, "I like working with numbers and data.", Category::Analytical),
    q(3, "I question assumptions before accepting a conclusion.", Category::Analytical),
    q(4, "I often come up with original ideas.", Category::Creative),
    q(5, "I enjoy expressing myself through art, writing or design.", Category::Creative),
    q(6, "I prefer tasks with room for imagination.", Category::Creative),
    q(7, "I feel energised after helping someone.", Category::Social),
    q(8, "I am good at understanding how others feel.", Category::Social),
    q(9, "I enjoy teaching or explaining things.", Category::Social),
    q(10, "I naturally take charge in group situations.", Category::Leadership),
    q(11, "I am comfortable making decisions under pressure.", Category::Leadership),
    q(12, "I like persuading people to support an idea.", Category::Leadership),
    q(13, "I enjoy building or repairing things with my hands.", Category::Practical),
    q(14, "I prefer clear procedures over open-ended tasks.", Category::Practical),
    q(15, "I like seeing the concrete result of my work.", Category::Practical),
];

/// Answers keyed by question id, each on a 1–5 agreement scale.
pub type Answers = HashMap<u32, u8>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityResult {
    /// In `Category::ALL` order.
    pub scores: Vec<CategoryScore>,
    pub dominant: Category,
}

fn validate(answers: &Answers) -> Result<(), AppError> {
    for (&id, &value) in answers {
        if !QUESTIONS.iter().any(|q| q.id == id) {
            return Err(AppError::Validation(format!("unknown question id {id}")));
        }
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(AppError::Validation(format!(
                "answer to question {id} must be between {MIN_ANSWER} and {MAX_ANSWER}, got {value}"
            )));
        }
    }
    Ok(())
}

/// Arithmetic mean of each category's questions; skipped questions count as
/// [`NEUTRAL_SCORE`].
pub fn score(answers: &Answers) -> Result<Vec<CategoryScore>, AppError> {
    validate(answers)?;

    Ok(Category::ALL
        .iter()
        .map(|&category| {
            let values: Vec<f64> = QUESTIONS
                .iter()
                .filter(|q| q.category == category)
                .map(|q| answers.get(&q.id).map_or(NEUTRAL_SCORE, |&v| f64::from(v)))
                .collect();
            let score = if values.is_empty() {
                NEUTRAL_SCORE
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            CategoryScore { category, score }
        })
        .collect())
}

/// Highest-scoring category; ties go to the earlier category in `Category::ALL`.
pub fn dominant(scores: &[CategoryScore]) -> Category {
    scores
        .iter()
        .fold(None::<&CategoryScore>, |best, s| match best {
            Some(b) if b.score >= s.score => Some(b),
            _ => Some(s),
        })
        .map_or(Category::Analytical, |s| s.category)
}

pub fn evaluate(answers: &Answers) -> Result<PersonalityResult, AppError> {
    let scores = score(answers)?;
    let dominant = dominant(&scores);
    Ok(PersonalityResult { scores, dominant })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(scores: &[CategoryScore], category: Category) -> f64 {
        scores.iter().find(|s| s.category == category).unwrap().score
    }

    #[test]
    fn test_empty_answers_are_neutral() {
        let scores = score(&Answers::new()).unwrap();
        assert_eq!(scores.len(), Category::ALL.len());
        assert!(scores.iter().all(|s| s.score == NEUTRAL_SCORE));
    }

    #[test]
    fn test_score_is_category_mean() {
        let answers: Answers = [(1, 5), (2, 4), (3, 3), (4, 1), (5, 2), (6, 3)].into();
        let scores = score(&answers).unwrap();
        assert_eq!(score_of(&scores, Category::Analytical), 4.0);
        assert_eq!(score_of(&scores, Category::Creative), 2.0);
        assert_eq!(score_of(&scores, Category::Social), 3.0);
    }

    #[test]
    fn test_unanswered_questions_count_as_three() {
        // Social: 5, (3), (3) => 11 / 3
        let answers: Answers = [(7, 5)].into();
        let scores = score(&answers).unwrap();
        assert!((score_of(&scores, Category::Social) - 11.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let answers: Answers = [(1, 6)].into();
        assert!(matches!(score(&answers), Err(AppError::Validation(_))));
        let answers: Answers = [(1, 0)].into();
        assert!(score(&answers).is_err());
    }

    #[test]
    fn test_unknown_question_rejected() {
        let answers: Answers = [(999, 3)].into();
        assert!(matches!(score(&answers), Err(AppError::Validation(ref m)) if m.contains("999")));
    }

    #[test]
    fn test_dominant_category() {
        let answers: Answers = [(10, 5), (11, 5), (12, 5)].into();
        let result = evaluate(&answers).unwrap();
        assert_eq!(result.dominant, Category::Leadership);

        let result = evaluate(&Answers::new()).unwrap();
        assert_eq!(result.dominant, Category::Analytical, "ties keep the first category");
    }

    #[test]
    fn test_every_category_has_questions() {
        for category in Category::ALL {
            assert!(QUESTIONS.iter().filter(|q| q.category == category).count() >= 3);
        }
    }
}
