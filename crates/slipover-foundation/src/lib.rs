//! Input foundation for Slipover
//!
//! Pointer phase/event types, drag translation tracking, and the pure
//! gesture-to-percent math the transition state machine runs on.

mod drag;
pub mod gesture_constants;
mod input;
mod percent;

pub use drag::*;
pub use input::*;
pub use percent::*;

pub mod prelude {
    pub use crate::drag::DragTracker;
    pub use crate::input::{PanEvent, PointerPhase};
    pub use crate::percent::{decide_release, drag_percent, TransitionDecision};
}
