use super::*;

use slipover_foundation::PanEvent;
use slipover_ui_graphics::{Point, Rect, Size};
use slipover_ui_layout::SizeClass;

use crate::config::OverlayConfig;
use crate::controller::PresentationController;
use crate::transition::{PresentationState, RestState};
use crate::view::ViewHandle;
use slipover_animation::FrameClock;

const FRAME_NANOS: u64 = 16_666_667;

struct Harness {
    bridge: GestureBridge,
    clock: FrameClock,
    frame_time: u64,
}

impl Harness {
    // container 800 tall, regular offset 44 -> travel 712
    fn new() -> Self {
        let clock = FrameClock::new();
        let controller = PresentationController::new(
            ViewHandle::new(Rect::default()),
            Size::new(400.0, 800.0),
            SizeClass::Regular,
            OverlayConfig::default(),
            clock.clone(),
        );
        Self {
            bridge: GestureBridge::new(controller),
            clock,
            frame_time: 0,
        }
    }

    fn controller(&self) -> &PresentationController {
        self.bridge.controller()
    }

    fn present(&mut self) -> ViewHandle {
        let overlay = ViewHandle::new(Rect::default());
        self.controller().present(overlay.clone(), false, None);
        overlay
    }

    fn settle(&mut self) {
        for _ in 0..600 {
            if !self.clock.has_frame_callbacks() {
                return;
            }
            self.frame_time += FRAME_NANOS;
            self.clock.drain_frame_callbacks(self.frame_time);
        }
        panic!("animations did not settle");
    }

    fn pan(&mut self, ty: f32, last: PointerPhase) {
        self.bridge.handle(PanEvent::start());
        self.bridge.handle(PanEvent::moved(Point::new(0.0, ty)));
        self.bridge
            .handle(PanEvent::new(last, Point::new(0.0, ty)));
    }
}

#[test]
fn long_downward_drag_commits_to_deferred() {
    let mut h = Harness::new();
    let overlay = h.present();

    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 600.0)));
    // 600 / 712 ~= 0.843, above the 0.5 threshold.
    assert!((h.controller().percent_complete() - 0.8427).abs() < 1e-3);

    h.bridge.handle(PanEvent::ended(Point::new(0.0, 600.0)));
    assert_eq!(h.controller().state(), PresentationState::Deferred);
    assert!(h.controller().is_deferred());
    h.settle();
    assert_eq!(overlay.frame().y, 756.0);
    assert_eq!(h.controller().primary().scale(), 1.0);
}

#[test]
fn short_drag_snaps_back_to_presented() {
    let mut h = Harness::new();
    let overlay = h.present();

    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 100.0)));
    // 100 / 712 ~= 0.140, below the threshold.
    assert!((h.controller().percent_complete() - 0.1404).abs() < 1e-3);

    h.bridge.handle(PanEvent::ended(Point::new(0.0, 100.0)));
    assert_eq!(h.controller().state(), PresentationState::Presented);
    assert!(!h.controller().is_deferred());
    h.settle();
    assert_eq!(overlay.frame().y, 44.0);
    assert_eq!(h.controller().primary().scale(), 0.9);
}

#[test]
fn mid_drag_state_is_transitioning_from_presented() {
    let mut h = Harness::new();
    h.present();

    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 356.0)));
    match h.controller().state() {
        PresentationState::Transitioning { from, percent } => {
            assert_eq!(from, RestState::Presented);
            assert!((percent - 0.5).abs() < 1e-3);
        }
        other => panic!("expected transitioning state, got {other:?}"),
    }
}

#[test]
fn cancelled_gesture_always_dismisses() {
    let mut h = Harness::new();
    let overlay = h.present();

    h.pan(200.0, PointerPhase::Cancel);
    h.settle();

    assert!(!h.controller().has_secondary());
    assert_eq!(h.controller().state(), PresentationState::Dismissed);
    assert!(overlay.parent().is_none());
}

#[test]
fn upward_drag_from_deferred_runs_on_the_shared_scale() {
    let mut h = Harness::new();
    let overlay = h.present();
    h.controller().defer(false, None);
    assert_eq!(overlay.frame().y, 756.0);

    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, -600.0)));
    // -600 / 712 + 1 ~= 0.157: most of the way back up.
    assert!((h.controller().percent_complete() - 0.1573).abs() < 1e-3);
    match h.controller().state() {
        PresentationState::Transitioning { from, .. } => assert_eq!(from, RestState::Deferred),
        other => panic!("expected transitioning state, got {other:?}"),
    }

    h.bridge.handle(PanEvent::ended(Point::new(0.0, -600.0)));
    assert_eq!(h.controller().state(), PresentationState::Presented);
    h.settle();
    assert_eq!(overlay.frame().y, 44.0);
}

#[test]
fn half_travel_release_from_deferred_restores() {
    let mut h = Harness::new();
    h.present();
    h.controller().defer(false, None);

    // Half travel up from deferred lands exactly at the 0.5 threshold,
    // which is not strictly above it.
    h.pan(-356.0, PointerPhase::End);
    assert_eq!(h.controller().state(), PresentationState::Presented);
    h.settle();
}

#[test]
fn events_without_a_secondary_are_dropped() {
    let mut h = Harness::new();
    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 300.0)));
    h.bridge.handle(PanEvent::ended(Point::new(0.0, 300.0)));
    assert_eq!(h.controller().state(), PresentationState::Dismissed);
    assert!(!h.controller().has_secondary());
}

#[test]
fn move_without_start_is_ignored() {
    let mut h = Harness::new();
    let overlay = h.present();
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 300.0)));
    assert_eq!(h.controller().state(), PresentationState::Presented);
    assert_eq!(overlay.frame().y, 44.0);
}

#[test]
fn gesture_interrupts_an_in_flight_restore() {
    let mut h = Harness::new();
    let overlay = h.present();
    h.controller().defer(false, None);

    // Kick off an animated restore, then grab the overlay mid-flight.
    h.controller().restore(true, None);
    h.frame_time += FRAME_NANOS;
    h.clock.drain_frame_callbacks(h.frame_time);
    h.frame_time += FRAME_NANOS;
    h.clock.drain_frame_callbacks(h.frame_time);
    let grabbed_y = overlay.frame().y;
    assert!(grabbed_y < 756.0 && grabbed_y > 44.0, "mid-flight at {grabbed_y}");

    h.bridge.handle(PanEvent::start());
    h.bridge.handle(PanEvent::moved(Point::new(0.0, 100.0)));
    assert!(!h.clock.has_frame_callbacks(), "snap cancels the animation");
    // The drag continues from the interrupted position, not from a rest
    // baseline: 100px of translation moves the overlay exactly 100px.
    assert!((overlay.frame().y - (grabbed_y + 100.0)).abs() < 1e-2);
    match h.controller().state() {
        PresentationState::Transitioning { .. } => {}
        other => panic!("expected transitioning state, got {other:?}"),
    }
    h.bridge.handle(PanEvent::ended(Point::new(0.0, 100.0)));
    h.settle();
}
