//! Drag translation tracking.
//!
//! The host reports cumulative translation since the recognizer started;
//! the tracker re-baselines on gesture begin so the transition math sees
//! translation relative to the begin position.

use slipover_ui_graphics::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    active: bool,
    baseline: Point,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a drag, capturing the current cumulative translation as the
    /// zero point.
    pub fn start(&mut self, translation: Point) {
        self.active = true;
        self.baseline = translation;
    }

    /// Vertical translation since the drag began. Zero while inactive.
    pub fn vertical_translation(&self, translation: Point) -> f32 {
        if self.active {
            translation.y - self.baseline.y
        } else {
            0.0
        }
    }

    pub fn finish(&mut self) {
        self.active = false;
        self.baseline = Point::ZERO;
    }
}
