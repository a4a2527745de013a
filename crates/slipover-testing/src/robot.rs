//! Robot-style harness for end-to-end overlay testing.
//!
//! The robot plays the host role: it owns the frame clock and the
//! gesture bridge, injects pan sequences, and pumps frames until the
//! animation system goes idle.
//!
//! # Example
//!
//! ```
//! use slipover_testing::OverlayRobot;
//!
//! let mut robot = OverlayRobot::new(400.0, 800.0);
//! let overlay = robot.present_overlay();
//! robot.pan_by(600.0);
//! assert!(robot.controller().is_deferred());
//! let _ = overlay;
//! ```

use slipover_animation::FrameClock;
use slipover_foundation::PanEvent;
use slipover_ui::{GestureBridge, OverlayConfig, PresentationController, ViewHandle};
use slipover_ui_graphics::{Point, Rect, Size};
use slipover_ui_layout::SizeClass;
use web_time::Duration;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS
const SETTLE_FRAME_LIMIT: usize = 600;

pub struct OverlayRobot {
    bridge: GestureBridge,
    clock: FrameClock,
    frame_time: u64,
}

impl OverlayRobot {
    /// Build a robot with a regular size class and default config.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, SizeClass::Regular, OverlayConfig::default())
    }

    pub fn with_config(
        width: f32,
        height: f32,
        size_class: SizeClass,
        config: OverlayConfig,
    ) -> Self {
        let clock = FrameClock::new();
        let controller = PresentationController::new(
            ViewHandle::new(Rect::default()),
            Size::new(width, height),
            size_class,
            config,
            clock.clone(),
        );
        Self {
            bridge: GestureBridge::new(controller),
            clock,
            frame_time: 0,
        }
    }

    pub fn controller(&self) -> &PresentationController {
        self.bridge.controller()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Present a fresh overlay view, animated, and pump until settled.
    pub fn present_overlay(&mut self) -> ViewHandle {
        let overlay = ViewHandle::new(Rect::default());
        self.controller().present(overlay.clone(), true, None);
        self.wait_for_idle();
        overlay
    }

    /// Advance up to `frames` frames, stopping early once idle.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            if !self.clock.has_frame_callbacks() {
                break;
            }
            self.frame_time += FRAME_NANOS;
            self.clock.drain_frame_callbacks(self.frame_time);
        }
    }

    /// Advance frame time by a wall-clock duration.
    pub fn advance_by(&mut self, duration: Duration) {
        let frames = (duration.as_nanos() as u64 / FRAME_NANOS).max(1);
        self.advance_frames(frames as usize);
    }

    /// Pump frames until no animation is pending.
    ///
    /// Panics if the system does not settle within a generous frame
    /// budget, which would mean a runaway animation.
    pub fn wait_for_idle(&mut self) {
        self.advance_frames(SETTLE_FRAME_LIMIT);
        assert!(
            !self.clock.has_frame_callbacks(),
            "animations did not settle within {SETTLE_FRAME_LIMIT} frames"
        );
    }

    /// Feed one pan event without pumping frames.
    pub fn send_pan(&mut self, event: PanEvent) {
        self.bridge.handle(event);
    }

    /// Run a full begin -> move -> end pan of `ty` vertical pixels and
    /// pump until the committed transition settles.
    pub fn pan_by(&mut self, ty: f32) {
        self.send_pan(PanEvent::start());
        self.send_pan(PanEvent::moved(Point::new(0.0, ty)));
        self.send_pan(PanEvent::ended(Point::new(0.0, ty)));
        self.wait_for_idle();
    }

    /// Begin a pan, drag by `ty`, then cancel it, and pump until the
    /// resulting dismissal settles.
    pub fn cancel_pan(&mut self, ty: f32) {
        self.send_pan(PanEvent::start());
        self.send_pan(PanEvent::moved(Point::new(0.0, ty)));
        self.send_pan(PanEvent::cancelled(Point::new(0.0, ty)));
        self.wait_for_idle();
    }

    /// Simulate a container resize / size-class change.
    pub fn resize(&mut self, width: f32, height: f32, size_class: SizeClass) {
        self.controller()
            .layout_environment_changed(Size::new(width, height), size_class);
    }
}
