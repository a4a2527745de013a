//! Animation system for Slipover
//!
//! Provides a host-pumped frame clock, easing curves, tween and spring
//! specs, and an `Animatable` value driver that reports every frame to a
//! listener and invokes one completion callback per animated block.

mod animation;
mod frame_clock;

pub use animation::*;
pub use frame_clock::*;

pub mod prelude {
    pub use crate::animation::{Animatable, Easing, Lerp, Motion, SpringSpec, SpringValue, TweenSpec};
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
}
