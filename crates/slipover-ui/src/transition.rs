//! Presentation states and the pure blend math.
//!
//! The blend runs on one shared percent scale: 0 is fully presented,
//! 1 is deferred. It is a pure function of the percent, the config, and
//! the current layout metrics, so the interactive gesture path and the
//! discrete animations produce identical intermediate frames.

use slipover_animation::{Lerp, SpringValue};
use slipover_ui_layout::OverlayMetrics;

use crate::config::OverlayConfig;

/// Rest position an interactive transition departs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestState {
    Presented,
    Deferred,
}

/// State of the presentation state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationState {
    /// No secondary view exists.
    Dismissed,
    /// Secondary fully shown, primary scaled and faded.
    Presented,
    /// Secondary peeking at the bottom edge, primary at identity.
    Deferred,
    /// Interactive, gesture-driven intermediate state.
    Transitioning { from: RestState, percent: f32 },
}

/// The coupled visual properties the transition drives, updated together
/// every frame so there is no skew between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Uniform scale of the primary view.
    pub primary_scale: f32,
    /// Opacity of the primary view.
    pub primary_alpha: f32,
    /// Top edge of the secondary view in container coordinates.
    pub secondary_top: f32,
}

impl Lerp for VisualState {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            primary_scale: self.primary_scale.lerp(&target.primary_scale, fraction),
            primary_alpha: self.primary_alpha.lerp(&target.primary_alpha, fraction),
            secondary_top: self.secondary_top.lerp(&target.secondary_top, fraction),
        }
    }
}

impl SpringValue for VisualState {
    fn metric(&self) -> f32 {
        // The dominant axis; the other two fields ride the same progress.
        self.secondary_top
    }
}

/// Blend the visual properties for a transition percent.
///
/// At percent 0 the primary carries the presented look and the secondary
/// top sits at the presented inset; at percent 1 the primary is back at
/// identity and the secondary peeks at the bottom. The percent is not
/// clamped; overshoot extrapolates linearly.
pub fn blend(percent: f32, config: &OverlayConfig, metrics: &OverlayMetrics) -> VisualState {
    let target_scale = config.presenting_view_scale;
    let target_alpha = config.presenting_view_alpha;
    VisualState {
        primary_scale: target_scale + (1.0 - target_scale) * percent,
        primary_alpha: target_alpha + (1.0 - target_alpha) * percent,
        secondary_top: metrics.presented_top() + metrics.travel() * percent,
    }
}

/// Setpoint for the fully presented position.
pub fn presented_visuals(config: &OverlayConfig, metrics: &OverlayMetrics) -> VisualState {
    blend(0.0, config, metrics)
}

/// Setpoint for the deferred (peeking) position.
pub fn deferred_visuals(config: &OverlayConfig, metrics: &OverlayMetrics) -> VisualState {
    blend(1.0, config, metrics)
}

/// Setpoint for the dismissed position: primary at identity, secondary
/// fully below the container.
pub fn dismissed_visuals(metrics: &OverlayMetrics) -> VisualState {
    VisualState {
        primary_scale: 1.0,
        primary_alpha: 1.0,
        secondary_top: metrics.offscreen_top(),
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
