//! Shared gesture constants.
//!
//! Values are in logical pixels / unitless percent. They match the
//! defaults of `OverlayConfig`; hosts that override the config should
//! treat these as the reference points.

/// Release threshold on the transition percent.
///
/// A pan ending with percent above this commits to the deferred
/// (peeking) position; at or below it the overlay is restored to fully
/// presented. 0.5 means "snap to whichever position is closer", which
/// keeps the release decision symmetric in both drag directions.
pub const DISMISSAL_THRESHOLD: f32 = 0.5;
