//! One-shot timer used to throttle change notifications.
//!
//! The controller arms the timer on the first move after the last fire and
//! the host calls `TransformGesture::fire_change` once it elapses.

use std::cell::Cell;
use std::rc::Rc;

pub trait ChangeTimer {
    fn arm(&mut self, delay_ms: u32);
    fn cancel(&mut self);
}

/// Host-driven timer: records arm/cancel calls and never fires by itself.
///
/// Clones share state, so a host can keep one clone and hand the other to
/// the controller, then fire whenever its own clock says so.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    armed: Rc<Cell<Option<u32>>>,
    arm_count: Rc<Cell<usize>>,
    cancel_count: Rc<Cell<usize>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay of the currently armed timer, if any.
    pub fn armed(&self) -> Option<u32> {
        self.armed.get()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get().is_some()
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count.get()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count.get()
    }

    /// Marks the timer as elapsed. Returns whether it was armed.
    pub fn elapse(&self) -> bool {
        self.armed.take().is_some()
    }
}

impl ChangeTimer for ManualTimer {
    fn arm(&mut self, delay_ms: u32) {
        self.armed.set(Some(delay_ms));
        self.arm_count.set(self.arm_count.get() + 1);
    }

    fn cancel(&mut self) {
        self.armed.set(None);
        self.cancel_count.set(self.cancel_count.get() + 1);
    }
}
