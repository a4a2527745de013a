//! Named configuration constants for the overlay transition.
//!
//! Every value is overridable; the defaults below are the reference
//! behavior. Durations are in milliseconds, offsets in logical pixels.

use slipover_animation::{Motion, SpringSpec};
use slipover_foundation::gesture_constants::DISMISSAL_THRESHOLD;
use slipover_ui_layout::EdgeOffsets;

/// Opacity of the primary view while an overlay is fully presented.
pub const PRESENTING_VIEW_ALPHA: f32 = 0.5;

/// Uniform scale of the primary view while an overlay is fully presented.
pub const PRESENTING_VIEW_SCALE: f32 = 0.9;

/// Edge offset while in a compact layout environment.
pub const EDGE_OFFSET_COMPACT: f32 = 32.0;

/// Edge offset while in a regular layout environment.
pub const EDGE_OFFSET_REGULAR: f32 = 44.0;

/// Duration of the present and restore transitions.
pub const PRESENTATION_MILLIS: u64 = 500;

/// Duration of the defer and dismiss transitions. Shorter: these are
/// smaller, settling motions.
pub const DISMISSAL_MILLIS: u64 = 350;

/// Spring damping ratio for discrete transitions.
pub const SPRING_DAMPING: f32 = 1.0;

/// Spring initial velocity, in progress units per second.
pub const SPRING_INITIAL_VELOCITY: f32 = 0.0;

/// Configuration for a [`PresentationController`].
///
/// [`PresentationController`]: crate::PresentationController
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    pub presenting_view_alpha: f32,
    pub presenting_view_scale: f32,
    pub edge_offsets: EdgeOffsets,
    pub presentation_millis: u64,
    pub dismissal_millis: u64,
    /// Release threshold on the transition percent; above it the overlay
    /// defers, at or below it the overlay restores.
    pub dismissal_threshold: f32,
    pub spring_damping: f32,
    pub spring_initial_velocity: f32,
}

impl OverlayConfig {
    /// Motion for the present and restore transitions.
    pub fn presentation_motion(&self) -> Motion {
        Motion::Spring(SpringSpec::with_duration(
            self.presentation_millis,
            self.spring_damping,
            self.spring_initial_velocity,
        ))
    }

    /// Motion for the defer and dismiss transitions.
    pub fn dismissal_motion(&self) -> Motion {
        Motion::Spring(SpringSpec::with_duration(
            self.dismissal_millis,
            self.spring_damping,
            self.spring_initial_velocity,
        ))
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            presenting_view_alpha: PRESENTING_VIEW_ALPHA,
            presenting_view_scale: PRESENTING_VIEW_SCALE,
            edge_offsets: EdgeOffsets::new(EDGE_OFFSET_COMPACT, EDGE_OFFSET_REGULAR),
            presentation_millis: PRESENTATION_MILLIS,
            dismissal_millis: DISMISSAL_MILLIS,
            dismissal_threshold: DISMISSAL_THRESHOLD,
            spring_damping: SPRING_DAMPING,
            spring_initial_velocity: SPRING_INITIAL_VELOCITY,
        }
    }
}
