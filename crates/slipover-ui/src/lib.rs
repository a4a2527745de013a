//! Overlay presentation controller for Slipover
//!
//! A container hosts a primary (base) view and at most one secondary
//! (overlay) view. The secondary animates between three positions:
//! fully presented, deferred (peeking at the bottom edge), and
//! dismissed. A contiguous pan gesture drives an interruptible
//! percent-complete transition across the coupled visual properties of
//! both views; releasing the gesture snaps to a terminal position based
//! on how far it travelled.

mod config;
mod controller;
mod gesture;
mod transition;
mod view;

pub use config::*;
pub use controller::*;
pub use gesture::*;
pub use transition::*;
pub use view::*;

pub mod prelude {
    pub use crate::config::OverlayConfig;
    pub use crate::controller::{PresentationController, PresenterHandle};
    pub use crate::gesture::GestureBridge;
    pub use crate::transition::{PresentationState, RestState, VisualState};
    pub use crate::view::ViewHandle;
}
