// Storage for a callback that re-queues itself every animation frame.
//
// The callback holds a clone of its own slot to reschedule, so the slot and
// the callback form a reference cycle until `release` empties it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct LoopSlot<F> {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<F>>>,
}

impl<F> Clone for LoopSlot<F> {
    fn clone(&self) -> Self {
        Self {
            running: self.running.clone(),
            pending: self.pending.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<F> Default for LoopSlot<F> {
    fn default() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            pending: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
        }
    }
}

impl<F> LoopSlot<F> {
    pub fn set(&self, f: F) {
        *self.callback.borrow_mut() = Some(f);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Queue the next call through `schedule` unless the slot was released.
    pub fn request(&self, schedule: impl FnOnce(&F) -> Option<i32>) {
        if !self.running.get() {
            return;
        }
        let id = self.callback.borrow().as_ref().and_then(schedule);
        self.pending.set(id);
    }

    /// Stop rescheduling and drop the callback with everything it captured.
    /// Returns the queued request id so the caller can cancel it.
    pub fn release(&self) -> Option<i32> {
        self.running.set(false);
        let id = self.pending.take();
        let cb = self.callback.try_borrow_mut().ok().and_then(|mut c| c.take());
        drop(cb);
        id
    }
}
