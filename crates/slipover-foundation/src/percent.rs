//! Gesture-to-percent math.
//!
//! One continuous scale covers both drag directions: percent 0 is fully
//! presented, percent 1 is deferred. Each drag is shifted by the percent
//! it began at (1 at the deferred rest, fractional when it grabs a
//! mid-flight animation) so the same scale applies unchanged.

/// Terminal state a released gesture commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDecision {
    /// Animate back to fully presented.
    Restore,
    /// Animate to the deferred (peeking) position.
    Defer,
    /// Animate out and destroy the secondary.
    Dismiss,
}

/// Map a vertical drag translation to a transition percent.
///
/// `travel` is the distance between the presented and deferred top edges
/// (`container_height - 2 * edge_offset`). `baseline` is the percent the
/// gesture began at: 0 at the presented rest, 1 at the deferred rest,
/// in between when the drag grabs an in-flight animation. The result is
/// intentionally unclamped; slight overshoot is absorbed by the layout
/// bounds.
pub fn drag_percent(vertical_translation: f32, travel: f32, baseline: f32) -> f32 {
    if travel <= f32::EPSILON {
        log::warn!("degenerate travel distance {travel}; ignoring drag");
        return baseline;
    }
    baseline + vertical_translation / travel
}

/// Decide where a released gesture goes.
///
/// An orderly end thresholds the percent; a cancelled (or otherwise
/// interrupted) gesture always discards the overlay rather than leaving
/// it ambiguous.
pub fn decide_release(cancelled: bool, percent: f32, threshold: f32) -> TransitionDecision {
    if cancelled {
        TransitionDecision::Dismiss
    } else if percent > threshold {
        TransitionDecision::Defer
    } else {
        TransitionDecision::Restore
    }
}

#[cfg(test)]
#[path = "tests/percent_tests.rs"]
mod tests;
