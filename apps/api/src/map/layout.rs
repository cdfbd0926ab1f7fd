//! Node placement for the roadmap map view.
//!
//! Nodes of a section are spread evenly along a fixed 800-unit band and joined
//! by an edge between each consecutive pair.
//!
//! Known defect: a single-node section divides by zero (`N - 1 = 0`) and its
//! node lands at NaN, which serializes as `null`. This matches the shipped
//! rendering behaviour and is kept until product decides how lone nodes should
//! be placed.

use serde::{Deserialize, Serialize};

use crate::roadmap::models::{Roadmap, RoadmapStep};

pub const BAND_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub index: usize,
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub title: String,
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<Edge>,
}

/// x-offset of every node in a section of `n` nodes.
pub fn node_offsets(n: usize) -> Vec<f64> {
    let spacing = BAND_WIDTH / (n as f64 - 1.0);
    (0..n).map(|i| i as f64 * spacing).collect()
}

pub fn layout_section(title: &str, steps: &[&RoadmapStep]) -> SectionLayout {
    let nodes: Vec<NodeLayout> = node_offsets(steps.len())
        .into_iter()
        .zip(steps)
        .enumerate()
        .map(|(index, (x, step))| NodeLayout {
            index,
            title: step.title.clone(),
            x,
            y: 0.0,
            completed: step.completed,
        })
        .collect();

    let edges = (1..nodes.len())
        .map(|i| Edge { from: i - 1, to: i })
        .collect();

    SectionLayout {
        title: title.to_string(),
        nodes,
        edges,
    }
}

pub fn layout_roadmap(roadmap: &Roadmap) -> Vec<SectionLayout> {
    roadmap
        .sections()
        .iter()
        .map(|s| layout_section(s.title, &s.steps))
        .collect()
}
