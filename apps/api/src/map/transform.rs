//! Pan/zoom state of the roadmap map view.
//!
//! Dragging commits the offset on every pointer move. A pointer-up anywhere in
//! the document ends the drag, so the view can never stay stuck in drag mode
//! after the pointer leaves the map element.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input events the map view reacts to, replayable in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    ZoomIn,
    ZoomOut,
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    DocumentPointerUp,
    SelectSection { index: usize },
    SelectNode { index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTransform {
    pub offset: Point,
    pub zoom: f64,
    pub dragging: bool,
    pub section: usize,
    pub selected_node: Option<usize>,
    #[serde(default)]
    drag_start: Point,
    #[serde(default)]
    drag_origin: Point,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self {
            offset: Point::default(),
            zoom: 1.0,
            dragging: false,
            section: 0,
            selected_node: None,
            drag_start: Point::default(),
            drag_origin: Point::default(),
        }
    }
}

impl MapTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_in(&mut self) {
        self.zoom = round_zoom(self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = round_zoom(self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn pointer_down(&mut self, pointer: Point) {
        self.dragging = true;
        self.drag_start = pointer;
        self.drag_origin = self.offset;
    }

    /// Moves the map by the pointer's displacement since the drag started.
    /// Ignored when no drag is in progress.
    pub fn pointer_move(&mut self, pointer: Point) {
        if !self.dragging {
            return;
        }
        self.offset = Point {
            x: self.drag_origin.x + (pointer.x - self.drag_start.x),
            y: self.drag_origin.y + (pointer.y - self.drag_start.y),
        };
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Pointer released outside the map element.
    pub fn document_pointer_up(&mut self) {
        self.pointer_up();
    }

    /// Switching sections re-centres the view. Zoom is kept.
    pub fn set_section(&mut self, index: usize) {
        if index != self.section {
            self.section = index;
            self.offset = Point::default();
            self.dragging = false;
            self.selected_node = None;
        }
    }

    /// Returns the selected index so the caller can open the node's details.
    pub fn select_node(&mut self, index: usize) -> usize {
        self.selected_node = Some(index);
        index
    }

    pub fn apply(&mut self, event: &MapEvent) {
        match *event {
            MapEvent::ZoomIn => self.zoom_in(),
            MapEvent::ZoomOut => self.zoom_out(),
            MapEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            MapEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            MapEvent::PointerUp => self.pointer_up(),
            MapEvent::DocumentPointerUp => self.document_pointer_up(),
            MapEvent::SelectSection { index } => self.set_section(index),
            MapEvent::SelectNode { index } => {
                self.select_node(index);
            }
        }
    }
}

// Repeated ±0.2 steps drift in binary floating point; keep one decimal.
fn round_zoom(zoom: f64) -> f64 {
    (zoom * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_is_clamped() {
        let mut t = MapTransform::new();
        for _ in 0..10 {
            t.zoom_in();
        }
        assert_eq!(t.zoom, MAX_ZOOM);

        for _ in 0..10 {
            t.zoom_out();
        }
        assert_eq!(t.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_steps_by_point_two() {
        let mut t = MapTransform::new();
        t.zoom_in();
        assert_eq!(t.zoom, 1.2);
        t.zoom_out();
        t.zoom_out();
        assert_eq!(t.zoom, 0.8);
    }

    #[test]
    fn test_drag_commits_continuously() {
        let mut t = MapTransform::new();
        t.pointer_down(Point::new(100.0, 100.0));
        t.pointer_move(Point::new(110.0, 95.0));
        assert_eq!(t.offset, Point::new(10.0, -5.0));
        t.pointer_move(Point::new(130.0, 90.0));
        assert_eq!(t.offset, Point::new(30.0, -10.0));
        t.pointer_up();

        // A second drag continues from where the first one left off.
        t.pointer_down(Point::new(0.0, 0.0));
        t.pointer_move(Point::new(-5.0, 5.0));
        assert_eq!(t.offset, Point::new(25.0, -5.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut t = MapTransform::new();
        t.pointer_move(Point::new(50.0, 50.0));
        assert_eq!(t.offset, Point::default());
    }

    #[test]
    fn test_document_pointer_up_clears_dragging() {
        let mut t = MapTransform::new();
        t.pointer_down(Point::new(0.0, 0.0));
        assert!(t.dragging);
        t.document_pointer_up();
        assert!(!t.dragging);

        t.pointer_move(Point::new(40.0, 40.0));
        assert_eq!(t.offset, Point::default());
    }

    #[test]
    fn test_translation_is_unbounded() {
        let mut t = MapTransform::new();
        t.pointer_down(Point::new(0.0, 0.0));
        t.pointer_move(Point::new(-1.0e6, 1.0e6));
        assert_eq!(t.offset, Point::new(-1.0e6, 1.0e6));
    }

    #[test]
    fn test_section_change_resets_offset() {
        let mut t = MapTransform::new();
        t.zoom_in();
        t.pointer_down(Point::new(0.0, 0.0));
        t.pointer_move(Point::new(20.0, 20.0));
        t.select_node(2);

        t.set_section(0);
        assert_eq!(t.offset, Point::new(20.0, 20.0), "same section keeps offset");

        t.set_section(1);
        assert_eq!(t.offset, Point::default());
        assert!(!t.dragging);
        assert_eq!(t.selected_node, None);
        assert_eq!(t.zoom, 1.2);
    }

    #[test]
    fn test_events_deserialize_and_replay() {
        let events: Vec<MapEvent> = serde_json::from_str(
            r#"[{"type": "pointer_down", "x": 1, "y": 1},
                {"type": "pointer_move", "x": 4, "y": 5},
                {"type": "document_pointer_up"},
                {"type": "zoom_out"}]"#,
        )
        .unwrap();

        let mut t = MapTransform::new();
        events.iter().for_each(|e| t.apply(e));
        assert_eq!(t.offset, Point::new(3.0, 4.0));
        assert!(!t.dragging);
        assert_eq!(t.zoom, 0.8);
    }
}
