use serde::{Deserialize, Serialize};

use crate::backend::Dashboard;
use crate::roadmap::progress::Progress;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedSummary {
    pub id: String,
    pub title: String,
    pub progress: Progress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub tracked: Vec<TrackedSummary>,
    /// Mean of per-roadmap percentages, 0 when nothing is tracked.
    pub overall_percent: u8,
    pub completed_roadmaps: usize,
}

pub fn summarize(dashboard: &Dashboard) -> DashboardSummary {
    let tracked: Vec<TrackedSummary> = dashboard
        .tracked_roadmaps
        .iter()
        .map(|r| TrackedSummary {
            id: r.id.clone(),
            title: r.title.clone(),
            progress: r.progress(),
        })
        .collect();

    let overall_percent = if tracked.is_empty() {
        0
    } else {
        let sum: u32 = tracked.iter().map(|t| u32::from(t.progress.percent)).sum();
        (sum as f64 / tracked.len() as f64).round() as u8
    };

    let completed_roadmaps = tracked
        .iter()
        .filter(|t| t.progress.total > 0 && t.progress.completed == t.progress.total)
        .count();

    DashboardSummary {
        tracked,
        overall_percent,
        completed_roadmaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard() {
        let summary = summarize(&Dashboard::default());
        assert!(summary.tracked.is_empty());
        assert_eq!(summary.overall_percent, 0);
        assert_eq!(summary.completed_roadmaps, 0);
    }

    #[test]
    fn test_overall_is_mean_of_percentages() {
        let dashboard: Dashboard = serde_json::from_value(serde_json::json!({
            "tracked_roadmaps": [
                {"id": 1, "title": "A", "steps": [{"title": "x", "completed": true}, {"title": "y"}]},
                {"id": 2, "title": "B", "steps": [{"title": "z", "completed": true}]},
                {"id": 3, "title": "C", "steps": []}
            ]
        }))
        .unwrap();

        let summary = summarize(&dashboard);
        assert_eq!(summary.tracked[0].progress.percent, 50);
        assert_eq!(summary.overall_percent, 50); // (50 + 100 + 0) / 3
        assert_eq!(summary.completed_roadmaps, 1);
    }
}
