//! A single-threaded continuous value with change subscribers.
//!
//! The scroll tracker owns one `Signal` per observed container and publishes
//! every recomputed progress through it. Consumers either poll `get()` from
//! the frame loop or subscribe for push updates; both see the same sample, so
//! the progress is computed exactly once per scroll/resize event.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback = Box<dyn FnMut(f32)>;

pub struct Signal {
    value: f32,
    version: u64,
    next_id: u32,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Signal {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            version: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Monotonic counter bumped on every accepted change.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Store `value` and notify subscribers. Returns false (and notifies
    /// nobody) when the value is unchanged.
    pub fn set(&mut self, value: f32) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        self.version += 1;
        for (_, cb) in self.subscribers.iter_mut() {
            cb(value);
        }
        true
    }

    /// Deliver the current value again, e.g. for the first paint after mount.
    pub fn notify(&mut self) {
        let value = self.value;
        for (_, cb) in self.subscribers.iter_mut() {
            cb(value);
        }
    }

    pub fn subscribe(&mut self, cb: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(cb)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Drop every subscriber; called when the owning container unmounts.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
