//! The presentation controller state machine.
//!
//! Owns the container, the always-present primary view, and at most one
//! secondary view. Discrete transitions (present / defer / restore /
//! dismiss) animate toward idempotent setpoints; the interactive path
//! applies the pure blend immediately. All per-secondary transients live
//! in one `SecondaryMount`, created whole in `present` and dropped whole
//! in the dismissal completion.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slipover_animation::{Animatable, FrameClock};
use slipover_ui_graphics::{Rect, Size};
use slipover_ui_layout::{AnchorSet, OverlayMetrics, OverlayPosition, SizeClass};

use crate::config::OverlayConfig;
use crate::transition::{
    blend, deferred_visuals, dismissed_visuals, presented_visuals, PresentationState, RestState,
    VisualState,
};
use crate::view::ViewHandle;

/// Callback invoked when a discrete transition finishes.
pub type TransitionCompletion = Box<dyn FnOnce()>;

/// Rest position a discrete transition is heading toward. Read when a
/// layout change arrives mid-flight and the running block has to be
/// re-targeted against the new metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Setpoint {
    Presented,
    Deferred,
    Offscreen,
}

/// Per-secondary transient state. Exists exactly while a secondary view
/// is attached.
struct SecondaryMount {
    view: ViewHandle,
    anchors: Rc<RefCell<AnchorSet>>,
    visuals: Animatable<VisualState>,
    setpoint: Setpoint,
}

struct ControllerInner {
    container: ViewHandle,
    primary: ViewHandle,
    mount: Option<SecondaryMount>,
    state: PresentationState,
    is_deferred: bool,
    percent_complete: f32,
    config: OverlayConfig,
    container_size: Size,
    size_class: SizeClass,
    clock: FrameClock,
}

impl ControllerInner {
    fn metrics(&self) -> OverlayMetrics {
        OverlayMetrics::new(
            self.container_size,
            self.config.edge_offsets.resolve(self.size_class),
        )
    }
}

/// Overlay presentation controller. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct PresentationController {
    inner: Rc<RefCell<ControllerInner>>,
}

/// Weak capability handle installed on the controller's container view,
/// found by [`ViewHandle::enclosing_presenter`].
#[derive(Clone)]
pub struct PresenterHandle(Weak<RefCell<ControllerInner>>);

impl PresenterHandle {
    pub fn upgrade(&self) -> Option<PresentationController> {
        self.0.upgrade().map(|inner| PresentationController { inner })
    }
}

impl PresentationController {
    /// Build a controller around a primary view. The primary fills the
    /// container and stays attached for the controller's lifetime.
    pub fn new(
        primary: ViewHandle,
        container_size: Size,
        size_class: SizeClass,
        config: OverlayConfig,
        clock: FrameClock,
    ) -> Self {
        let container = ViewHandle::new(Rect::from_size(container_size));
        primary.set_frame(Rect::from_size(container_size));
        container.add_child(&primary);

        let controller = Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                container: container.clone(),
                primary,
                mount: None,
                state: PresentationState::Dismissed,
                is_deferred: false,
                percent_complete: 0.0,
                config,
                container_size,
                size_class,
                clock,
            })),
        };
        container.install_presenter(PresenterHandle(Rc::downgrade(&controller.inner)));
        controller
    }

    pub fn has_secondary(&self) -> bool {
        self.inner.borrow().mount.is_some()
    }

    pub fn is_deferred(&self) -> bool {
        self.inner.borrow().is_deferred
    }

    pub fn state(&self) -> PresentationState {
        self.inner.borrow().state
    }

    pub fn percent_complete(&self) -> f32 {
        self.inner.borrow().percent_complete
    }

    pub fn config(&self) -> OverlayConfig {
        self.inner.borrow().config
    }

    pub fn metrics(&self) -> OverlayMetrics {
        self.inner.borrow().metrics()
    }

    pub fn container(&self) -> ViewHandle {
        self.inner.borrow().container.clone()
    }

    pub fn primary(&self) -> ViewHandle {
        self.inner.borrow().primary.clone()
    }

    pub fn secondary(&self) -> Option<ViewHandle> {
        self.inner.borrow().mount.as_ref().map(|m| m.view.clone())
    }

    /// Attach `view` as the secondary and animate it in from below while
    /// the primary takes on the presented look. Ignored if a secondary
    /// already exists; at most one overlay is ever attached.
    pub fn present(&self, view: ViewHandle, animated: bool, on_complete: Option<TransitionCompletion>) {
        let (visuals, target, motion) = {
            let mut inner = self.inner.borrow_mut();
            if inner.mount.is_some() {
                log::debug!("present ignored: a secondary view is already attached");
                return;
            }
            let metrics = inner.metrics();

            view.set_frame(Rect::new(
                0.0,
                metrics.offscreen_top(),
                metrics.container.width,
                metrics.secondary_height(),
            ));
            inner.container.add_child(&view);

            let mut anchors = AnchorSet::new(metrics.edge_offset, metrics.offscreen_top());
            anchors.activate(OverlayPosition::Presented);
            let anchors = Rc::new(RefCell::new(anchors));

            let visuals = Animatable::new(dismissed_visuals(&metrics), inner.clock.clone());
            let primary = inner.primary.clone();
            let secondary = view.clone();
            visuals.set_listener(move |v: &VisualState| {
                primary.set_scale(v.primary_scale);
                primary.set_alpha(v.primary_alpha);
                secondary.set_frame_y(v.secondary_top);
            });

            inner.mount = Some(SecondaryMount {
                view: view.clone(),
                anchors,
                visuals: visuals.clone(),
                setpoint: Setpoint::Presented,
            });
            inner.state = PresentationState::Presented;
            inner.is_deferred = false;
            inner.percent_complete = 0.0;

            let target = presented_visuals(&inner.config, &metrics);
            (visuals, target, inner.config.presentation_motion())
        };

        if animated {
            visuals.animate_to(target, motion, on_complete);
        } else {
            visuals.snap_to(target);
            if let Some(complete) = on_complete {
                complete();
            }
        }
    }

    /// Animate the secondary fully below the container, then detach and
    /// destroy it. The only path that destroys the secondary. No-op
    /// without one.
    pub fn dismiss(&self, animated: bool, on_complete: Option<TransitionCompletion>) {
        let (visuals, target, motion) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let metrics = inner.metrics();
            let Some(mount) = inner.mount.as_mut() else {
                log::debug!("dismiss ignored: no secondary view");
                return;
            };
            mount
                .anchors
                .borrow_mut()
                .activate(OverlayPosition::Transitional);
            mount.setpoint = Setpoint::Offscreen;
            (
                mount.visuals.clone(),
                dismissed_visuals(&metrics),
                inner.config.dismissal_motion(),
            )
        };

        let teardown = self.teardown_on_complete(on_complete);
        if animated {
            visuals.animate_to(target, motion, Some(teardown));
        } else {
            visuals.snap_to(target);
            teardown();
        }
    }

    /// Settle the secondary to the deferred (peeking) position and the
    /// primary back to identity. No-op without a secondary.
    pub fn defer(&self, animated: bool, on_complete: Option<TransitionCompletion>) {
        self.settle(RestState::Deferred, animated, on_complete);
    }

    /// Inverse of [`defer`]: bring the secondary back to fully presented.
    /// No-op without a secondary.
    ///
    /// [`defer`]: Self::defer
    pub fn restore(&self, animated: bool, on_complete: Option<TransitionCompletion>) {
        self.settle(RestState::Presented, animated, on_complete);
    }

    fn settle(&self, to: RestState, animated: bool, on_complete: Option<TransitionCompletion>) {
        let (visuals, target, motion) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let metrics = inner.metrics();
            let Some(mount) = inner.mount.as_mut() else {
                log::debug!("settle ignored: no secondary view");
                return;
            };
            let (position, state, percent, target, motion) = match to {
                RestState::Deferred => (
                    OverlayPosition::Deferred,
                    PresentationState::Deferred,
                    1.0,
                    deferred_visuals(&inner.config, &metrics),
                    inner.config.dismissal_motion(),
                ),
                RestState::Presented => (
                    OverlayPosition::Presented,
                    PresentationState::Presented,
                    0.0,
                    presented_visuals(&inner.config, &metrics),
                    inner.config.presentation_motion(),
                ),
            };
            mount.anchors.borrow_mut().activate(position);
            mount.setpoint = match to {
                RestState::Deferred => Setpoint::Deferred,
                RestState::Presented => Setpoint::Presented,
            };
            let visuals = mount.visuals.clone();
            inner.state = state;
            inner.is_deferred = to == RestState::Deferred;
            inner.percent_complete = percent;
            (visuals, target, motion)
        };

        if animated {
            visuals.animate_to(target, motion, on_complete);
        } else {
            visuals.snap_to(target);
            if let Some(complete) = on_complete {
                complete();
            }
        }
    }

    /// Apply the interactive blend for a gesture-driven percent. Purely
    /// visual: the secondary slot and the deferred flag are untouched.
    /// No-op without a secondary.
    pub fn update_transition(&self, percent: f32) {
        let (visuals, value) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let Some(mount) = inner.mount.as_ref() else {
                log::debug!("update_transition ignored: no secondary view");
                return;
            };
            let metrics = inner.metrics();
            let value = blend(percent, &inner.config, &metrics);
            {
                let mut anchors = mount.anchors.borrow_mut();
                anchors.activate(OverlayPosition::Transitional);
                anchors.set_transitional_top(value.secondary_top);
            }
            let visuals = mount.visuals.clone();
            let from = if inner.is_deferred {
                RestState::Deferred
            } else {
                RestState::Presented
            };
            inner.state = PresentationState::Transitioning { from, percent };
            inner.percent_complete = percent;
            (visuals, value)
        };
        visuals.snap_to(value);
    }

    /// Capture the percent a gesture begins at, inverting the blend on
    /// the current (possibly mid-flight) secondary top. At rest this is
    /// exactly 0 or 1; grabbing an in-flight animation yields the
    /// fractional percent it was interrupted at, so the drag continues
    /// from there without a jump.
    pub(crate) fn begin_interactive(&self) -> f32 {
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        let Some(mount) = inner.mount.as_ref() else {
            return 0.0;
        };
        let metrics = inner.metrics();
        let travel = metrics.travel();
        let baseline = if travel <= f32::EPSILON {
            if inner.is_deferred { 1.0 } else { 0.0 }
        } else {
            (mount.visuals.value().secondary_top - metrics.presented_top()) / travel
        };
        inner.percent_complete = baseline;
        baseline
    }

    /// The hosting container's size or size class changed. Re-derives the
    /// edge offset, updates the stored anchor constants in place, and
    /// reframes both views. An in-flight discrete animation is redirected
    /// at its setpoint under the new metrics; settled states are
    /// re-applied directly. Safe with no secondary attached.
    pub fn layout_environment_changed(&self, size: Size, size_class: SizeClass) {
        let (visuals, value, in_flight) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            inner.container_size = size;
            inner.size_class = size_class;
            inner.container.set_frame(Rect::from_size(size));
            inner.primary.set_frame(Rect::from_size(size));

            let Some(mount) = inner.mount.as_ref() else {
                return;
            };
            let metrics = inner.metrics();
            mount.anchors.borrow_mut().update_edge_offset(metrics.edge_offset);
            let frame = mount.view.frame();
            mount.view.set_frame(Rect::new(
                0.0,
                frame.y,
                metrics.container.width,
                metrics.secondary_height(),
            ));

            if mount.visuals.is_animating() {
                // Redirect the running block at the setpoint re-derived
                // from the new metrics; its completion stays armed.
                let target = match mount.setpoint {
                    Setpoint::Presented => presented_visuals(&inner.config, &metrics),
                    Setpoint::Deferred => deferred_visuals(&inner.config, &metrics),
                    Setpoint::Offscreen => dismissed_visuals(&metrics),
                };
                (mount.visuals.clone(), target, true)
            } else {
                let percent = match inner.state {
                    PresentationState::Transitioning { percent, .. } => percent,
                    _ if inner.is_deferred => 1.0,
                    _ => 0.0,
                };
                let value = blend(percent, &inner.config, &metrics);
                (mount.visuals.clone(), value, false)
            }
        };

        if in_flight {
            visuals.retarget(value);
        } else {
            visuals.snap_to(value);
        }
    }

    /// Teardown closure shared by the animated and immediate dismissal
    /// paths: detaches the secondary, drops the whole mount, and resets
    /// the machine to `Dismissed`.
    fn teardown_on_complete(&self, on_complete: Option<TransitionCompletion>) -> TransitionCompletion {
        let weak = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                let view = {
                    let mut inner = inner.borrow_mut();
                    let mount = inner.mount.take();
                    inner.state = PresentationState::Dismissed;
                    inner.is_deferred = false;
                    inner.percent_complete = 0.0;
                    mount.map(|m| m.view)
                };
                if let Some(view) = view {
                    view.remove_from_parent();
                }
            }
            if let Some(complete) = on_complete {
                complete();
            }
        })
    }

    /// Active-anchor snapshot for the attached secondary, if any.
    pub fn anchor_set(&self) -> Option<AnchorSet> {
        self.inner
            .borrow()
            .mount
            .as_ref()
            .map(|m| m.anchors.borrow().clone())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
