// Roadmap map view: node placement and pan/zoom state.

pub mod handlers;
pub mod layout;
pub mod transform;
