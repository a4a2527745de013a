//! Bridge from the raw pan phase stream to the controller.
//!
//! Pure math lives in `slipover-foundation`; this type only owns the
//! wiring: baseline reset on begin, percent updates on change, and the
//! release decision on end/cancel.

use slipover_foundation::{decide_release, drag_percent, DragTracker, PanEvent, PointerPhase, TransitionDecision};

use crate::controller::PresentationController;

pub struct GestureBridge {
    controller: PresentationController,
    tracker: DragTracker,
    /// Percent the active drag began at; offsets every translation.
    begin_percent: f32,
}

impl GestureBridge {
    pub fn new(controller: PresentationController) -> Self {
        Self {
            controller,
            tracker: DragTracker::new(),
            begin_percent: 0.0,
        }
    }

    pub fn controller(&self) -> &PresentationController {
        &self.controller
    }

    /// Feed one pan event. Events arriving with no secondary attached are
    /// dropped; a dangling transition must never be driven.
    pub fn handle(&mut self, event: PanEvent) {
        if !self.controller.has_secondary() {
            log::debug!("pan event ignored: no secondary view");
            self.tracker.finish();
            return;
        }

        match event.phase {
            PointerPhase::Start => {
                self.tracker.start(event.translation);
                self.begin_percent = self.controller.begin_interactive();
            }
            PointerPhase::Move => {
                if !self.tracker.is_active() {
                    return;
                }
                let translation = self.tracker.vertical_translation(event.translation);
                let percent = drag_percent(
                    translation,
                    self.controller.metrics().travel(),
                    self.begin_percent,
                );
                self.controller.update_transition(percent);
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.tracker.finish();
                let cancelled = event.phase == PointerPhase::Cancel;
                let percent = self.controller.percent_complete();
                let threshold = self.controller.config().dismissal_threshold;
                match decide_release(cancelled, percent, threshold) {
                    TransitionDecision::Restore => self.controller.restore(true, None),
                    TransitionDecision::Defer => self.controller.defer(true, None),
                    TransitionDecision::Dismiss => self.controller.dismiss(true, None),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
