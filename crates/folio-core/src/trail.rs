//! Mouse-trail gallery: a ring of image slots dropped along the pointer path.

use crate::constants::{TRAIL_MAX_VISIBLE, TRAIL_SLOT_COUNT, TRAIL_STEP_PX};
use crate::error::{FolioError, Result};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Cumulative Manhattan travel between two placements.
    pub step_px: f32,
    /// Ring size N.
    pub slots: usize,
    /// Sliding window K, K < N.
    pub max_visible: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            step_px: TRAIL_STEP_PX,
            slots: TRAIL_SLOT_COUNT,
            max_visible: TRAIL_MAX_VISIBLE,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_px > 0.0) {
            return Err(FolioError::InvalidTrailStep(self.step_px));
        }
        if self.max_visible == 0 || self.max_visible >= self.slots {
            return Err(FolioError::InvalidTrail {
                slots: self.slots,
                max_visible: self.max_visible,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailSlot {
    pub position: Vec2,
    pub visible: bool,
    /// Stacking order; 0 for hidden slots, 1..=K oldest to newest otherwise.
    pub z: u32,
}

/// Result of a qualifying pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub slot: usize,
    pub position: Vec2,
    /// Slot hidden to keep the window at K.
    pub evicted: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct MouseTrail {
    config: TrailConfig,
    slots: Vec<TrailSlot>,
    steps: f32,
    next_index: usize,
    visible: usize,
}

impl MouseTrail {
    pub fn new(config: TrailConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            slots: vec![TrailSlot::default(); config.slots],
            config,
            steps: 0.0,
            next_index: 0,
            visible: 0,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn slots(&self) -> &[TrailSlot] {
        &self.slots
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Feed one pointer-move event. `movement` is the event's own delta.
    pub fn on_pointer_move(&mut self, position: Vec2, movement: Vec2) -> Option<Placement> {
        let travel = movement.x.abs() + movement.y.abs();
        if travel.is_finite() {
            self.steps += travel;
        }

        let mut placed = None;
        if self.steps >= self.next_index as f32 * self.config.step_px {
            let evicted = if self.visible == self.config.max_visible {
                self.hide_oldest()
            } else {
                None
            };
            let slot = self.next_index;
            self.slots[slot] = TrailSlot {
                position,
                visible: true,
                z: 0,
            };
            self.next_index += 1;
            self.visible += 1;
            self.restack();
            placed = Some(Placement {
                slot,
                position,
                evicted,
            });
        }

        if self.next_index == self.slots.len() {
            self.next_index = 0;
            // Must travel a full step again before slot 0 is reused.
            self.steps = -self.config.step_px;
        }
        placed
    }

    /// Slot indices currently visible, oldest first.
    pub fn window(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.slots.len();
        let first = self.next_index + n - self.visible;
        (first..first + self.visible).map(move |i| i % n)
    }

    /// Hide everything and restart the distance counter.
    pub fn reset(&mut self) {
        for s in &mut self.slots {
            *s = TrailSlot::default();
        }
        self.steps = 0.0;
        self.next_index = 0;
        self.visible = 0;
    }

    fn hide_oldest(&mut self) -> Option<usize> {
        let oldest = self.window().next()?;
        let slot = &mut self.slots[oldest];
        slot.visible = false;
        slot.z = 0;
        self.visible -= 1;
        Some(oldest)
    }

    fn restack(&mut self) {
        let order: Vec<usize> = self.window().collect();
        for (rank, idx) in order.into_iter().enumerate() {
            self.slots[idx].z = rank as u32 + 1;
        }
    }
}
