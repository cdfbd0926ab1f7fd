//! Completion tracking for a roadmap's steps.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::models::{Roadmap, RoadmapStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// 0 – 100, rounded to the nearest integer. 0 for an empty roadmap.
    pub percent: u8,
}

pub fn compute_progress(steps: &[RoadmapStep]) -> Progress {
    let total = steps.len();
    let completed = steps.iter().filter(|s| s.completed).count();
    let percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };
    Progress {
        completed,
        total,
        percent,
    }
}

impl Roadmap {
    pub fn progress(&self) -> Progress {
        compute_progress(&self.steps)
    }

    /// Marks a step complete or incomplete by index.
    pub fn set_step_completed(&mut self, index: usize, completed: bool) -> Result<Progress, AppError> {
        let total = self.steps.len();
        let step = self.steps.get_mut(index).ok_or_else(|| {
            AppError::Validation(format!(
                "step index {index} is out of range for a roadmap with {total} steps"
            ))
        })?;
        step.completed = completed;
        Ok(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap(flags: &[bool]) -> Roadmap {
        Roadmap {
            id: "r".to_string(),
            title: "Roadmap".to_string(),
            description: String::new(),
            steps: flags
                .iter()
                .enumerate()
                .map(|(i, &completed)| RoadmapStep {
                    title: format!("Step {i}"),
                    description: String::new(),
                    section: None,
                    icon: None,
                    resources: vec![],
                    tips: vec![],
                    completed,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_roadmap_is_zero_percent() {
        let p = roadmap(&[]).progress();
        assert_eq!(p, Progress { completed: 0, total: 0, percent: 0 });
    }

    #[test]
    fn test_percent_rounds() {
        let p = roadmap(&[true, false, false]).progress();
        assert_eq!(p.completed, 1);
        assert_eq!(p.total, 3);
        assert_eq!(p.percent, 33);

        let p = roadmap(&[true, true, false]).progress();
        assert_eq!(p.percent, 67);
    }

    #[test]
    fn test_toggle_never_exceeds_total() {
        let mut r = roadmap(&[false, false]);
        r.set_step_completed(0, true).unwrap();
        r.set_step_completed(0, true).unwrap();
        let p = r.set_step_completed(1, true).unwrap();
        assert_eq!(p.completed, 2);
        assert!(p.completed <= p.total);
        assert_eq!(p.percent, 100);

        let p = r.set_step_completed(1, false).unwrap();
        assert_eq!(p.completed, 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_rejected() {
        let mut r = roadmap(&[false]);
        let err = r.set_step_completed(3, true).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
