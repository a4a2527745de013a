//! Testing utilities and harness for Slipover
//!
//! `OverlayRobot` drives a real controller the way a host would: it owns
//! the frame clock, injects pan sequences, and pumps animations to
//! completion. The `assertions` module holds fuzzy matchers for
//! positions that may drift by sub-pixel amounts.

pub mod assertions;
mod robot;

pub use robot::OverlayRobot;
pub use web_time::Duration;
