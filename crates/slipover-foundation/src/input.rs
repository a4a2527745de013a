//! Pan gesture event types delivered by the host.

use slipover_ui_graphics::Point;

/// Phase of a contiguous pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One step of a pan gesture: phase plus the cumulative translation since
/// the recognizer started, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PointerPhase,
    pub translation: Point,
}

impl PanEvent {
    pub fn new(phase: PointerPhase, translation: Point) -> Self {
        Self { phase, translation }
    }

    pub fn start() -> Self {
        Self::new(PointerPhase::Start, Point::ZERO)
    }

    pub fn moved(translation: Point) -> Self {
        Self::new(PointerPhase::Move, translation)
    }

    pub fn ended(translation: Point) -> Self {
        Self::new(PointerPhase::End, translation)
    }

    pub fn cancelled(translation: Point) -> Self {
        Self::new(PointerPhase::Cancel, translation)
    }
}
