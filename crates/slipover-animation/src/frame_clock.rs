//! Host-pumped frame clock.
//!
//! The embedding host (or a test harness) owns the timing source and calls
//! [`FrameClock::drain_frame_callbacks`] once per frame with the current
//! frame time in nanoseconds. Callbacks registered during a drain run on
//! the next frame, so an animation that reschedules itself advances one
//! step per pump.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct ClockInner {
    callbacks: VecDeque<FrameCallbackEntry>,
    next_id: FrameCallbackId,
}

/// Single-threaded frame callback registry.
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ClockInner {
                callbacks: VecDeque::new(),
                next_id: 1,
            })),
        }
    }

    /// Register a one-shot callback for the next frame. Dropping the
    /// returned registration cancels it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push_back(FrameCallbackEntry {
            id,
            callback: Some(Box::new(callback)),
        });
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Run every callback registered before this call with the given frame
    /// time. Callbacks registered while draining land on the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            pending.reserve(inner.callbacks.len());
            while let Some(mut entry) = inner.callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
        }
        for callback in pending {
            callback(frame_time_nanos);
        }
    }

    /// Whether any callback is waiting for a frame.
    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a registered frame callback; cancels on drop.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<ClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.clock.upgrade() {
            let mut inner = inner.borrow_mut();
            if let Some(index) = inner.callbacks.iter().position(|entry| entry.id == id) {
                inner.callbacks.remove(index);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
