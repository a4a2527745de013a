//! Easing curves, tween/spring specs, and the `Animatable` value driver.

use std::cell::RefCell;
use std::rc::Rc;

use crate::frame_clock::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Trait for values that can participate in spring animations.
///
/// The physics runs on a progress scalar derived from [`metric`], so a
/// compound value animates as one block with no skew between its fields.
///
/// [`metric`]: SpringValue::metric
pub trait SpringValue: Lerp + Clone {
    /// Scalar projection of the value used for physics calculations.
    fn metric(&self) -> f32;

    /// Progress of `current` between `start` and `target`, in [0, 1] when
    /// on the segment.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.metric();
        let target_val = target.metric();
        let current_val = current.metric();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Whether `current` is close enough to `target` to stop the spring.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.metric() - target.metric()).abs() < threshold
    }
}

impl SpringValue for f32 {
    fn metric(&self) -> f32 {
        *self
    }
}

impl SpringValue for f64 {
    fn metric(&self) -> f32 {
        *self as f32
    }
}

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using a cubic curve.
    EaseIn,
    /// Ease out using a cubic curve.
    EaseOut,
    /// Ease in and out using a cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard curve).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric value matching the x fraction,
    // clamped to [0, 1].
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        // Binary subdivision fallback when Newton-Raphson stalls.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Time-based animation specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = bouncy.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values settle faster.
    pub stiffness: f32,
    /// Initial velocity in progress units per second.
    pub initial_velocity: f32,
    /// Velocity threshold to stop the animation.
    pub velocity_threshold: f32,
    /// Position threshold (in metric units) to stop the animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn critically_damped() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            initial_velocity: 0.0,
            velocity_threshold: 0.01,
            position_threshold: 0.1,
        }
    }

    /// Derive stiffness from a target settle duration.
    ///
    /// For a damped spring the progress error decays roughly like
    /// `exp(-zeta * omega * t)`, so the animation is visually settled once
    /// `zeta * omega * duration ~= 4.6` (about 1% residual). Solving for
    /// stiffness gives `omega^2` below.
    pub fn with_duration(duration_millis: u64, damping_ratio: f32, initial_velocity: f32) -> Self {
        let seconds = (duration_millis.max(1) as f32) / 1000.0;
        let omega = 4.6 / (damping_ratio.max(0.1) * seconds);
        Self {
            damping_ratio,
            stiffness: omega * omega,
            initial_velocity,
            ..Self::critically_damped()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::critically_damped()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Time-based tween animation.
    Tween(TweenSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Tween(TweenSpec::default())
    }
}

type Listener<T> = Rc<dyn Fn(&T)>;

/// Callback invoked once when an animated block reaches its target.
pub type AnimationCompletion = Box<dyn FnOnce()>;

/// Generic animatable value holder.
///
/// One animated block at a time: re-targeting cancels the in-flight block
/// and drops its completion callback. Values are reported to the listener
/// every frame, and also on `snap_to`, so coupled visual properties stay
/// in lockstep.
pub struct Animatable<T: SpringValue + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringValue + 'static> {
    clock: FrameClock,
    current: T,
    velocity: f32,
    start: T,
    target: T,
    motion: Motion,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listener: Option<Listener<T>>,
    completion: Option<AnimationCompletion>,
}

impl<T: SpringValue + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            motion: Motion::default(),
            start_time_nanos: None,
            registration: None,
            listener: None,
            completion: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Install the per-frame value observer. Replaces any previous one.
    pub fn set_listener(&self, listener: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Current (possibly mid-flight) value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate to the target value. Supersedes any in-flight block; the
    /// superseded block's completion is dropped without being invoked.
    pub fn animate_to(&self, target: T, motion: Motion, completion: Option<AnimationCompletion>) {
        {
            let mut inner = self.inner.borrow_mut();

            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.completion = completion;

            inner.start = inner.current.clone();
            inner.target = target;
            inner.motion = motion;
            inner.start_time_nanos = None;
            inner.velocity = match motion {
                Motion::Spring(spec) => spec.initial_velocity,
                Motion::Tween(_) => 0.0,
            };
        }

        Self::schedule_frame(&self.inner);
    }

    /// Redirect the in-flight block toward a new target, keeping its
    /// motion and completion callback. The block restarts from the
    /// current interpolated value. No-op while idle.
    pub fn retarget(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if inner.registration.is_none() {
            return;
        }
        inner.start = inner.current.clone();
        inner.target = target;
        inner.start_time_nanos = None;
    }

    /// Jump to the value without animating. Cancels any in-flight block
    /// and notifies the listener.
    pub fn snap_to(&self, target: T) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.completion = None;
            inner.current = target.clone();
            inner.start = target.clone();
            inner.target = target;
            inner.start_time_nanos = None;
            inner.velocity = 0.0;
            inner.listener.clone()
        };
        if let Some(listener) = listener {
            let value = self.inner.borrow().current.clone();
            listener(&value);
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let mut finished: Option<AnimationCompletion> = None;
        let notify: Option<(Listener<T>, T)>;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            match inner.motion {
                Motion::Tween(spec) => {
                    let start_time = inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(*start_time);
                    let delay_nanos = spec.delay_millis * 1_000_000;

                    if elapsed_nanos < delay_nanos {
                        schedule_next = true;
                    } else {
                        let animation_elapsed = elapsed_nanos - delay_nanos;
                        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                        let linear_progress =
                            (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                        let progress = spec.easing.transform(linear_progress);

                        inner.current = inner.start.lerp(&inner.target, progress);

                        if linear_progress >= 1.0 {
                            inner.current = inner.target.clone();
                            inner.start = inner.target.clone();
                            inner.start_time_nanos = None;
                            finished = inner.completion.take();
                        } else {
                            schedule_next = true;
                        }
                    }
                }
                Motion::Spring(spec) => {
                    // Damped harmonic oscillator over the progress scalar,
                    // integrated with semi-implicit Euler for stability.
                    let start_time = inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(*start_time);
                    let dt = elapsed_nanos as f32 / 1_000_000_000.0;

                    if dt == 0.0 {
                        schedule_next = true;
                    } else {
                        let stiffness = spec.stiffness;
                        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();

                        let mut prev_time = 0.0f32;
                        let timestep: f32 = 0.016;

                        while prev_time < dt {
                            let step = timestep.min(dt - prev_time);

                            let current_progress = <T as SpringValue>::spring_progress(
                                &inner.start,
                                &inner.target,
                                &inner.current,
                            );

                            // Target lives at progress 1.0.
                            let displacement = current_progress - 1.0;
                            let spring_force = -stiffness * displacement - damping * inner.velocity;

                            inner.velocity += spring_force * step;
                            let new_progress = current_progress + inner.velocity * step;

                            inner.current = inner
                                .start
                                .lerp(&inner.target, new_progress.clamp(0.0, 2.0));

                            prev_time += step;
                        }

                        // Re-anchor so the elapsed window stays one frame wide.
                        inner.start_time_nanos = Some(frame_time_nanos);

                        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                        let near_target = <T as SpringValue>::is_near_target(
                            &inner.current,
                            &inner.target,
                            spec.position_threshold,
                        );

                        if at_rest && near_target {
                            inner.current = inner.target.clone();
                            inner.start = inner.target.clone();
                            inner.start_time_nanos = None;
                            inner.velocity = 0.0;
                            finished = inner.completion.take();
                        } else {
                            schedule_next = true;
                        }
                    }
                }
            }

            notify = inner
                .listener
                .clone()
                .map(|listener| (listener, inner.current.clone()));
        }

        if let Some((listener, value)) = notify {
            listener(&value);
        }
        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(completion) = finished {
            completion();
        }
    }
}

impl<T: SpringValue + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
