//! Pinned sections: a section held in the viewport while its track advances
//! with scroll distance.

use crate::mapper::clamp_progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinState {
    Unpinned,
    Pinned,
}

/// How much extra scroll distance the pin consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinSpan {
    /// Horizontal track: pinned while `track_len - viewport_w` pixels scroll by.
    Horizontal { track_len: f64 },
    /// Vertical zoom effect: pinned for a fixed multiple of viewport height.
    Vertical { viewport_multiple: f64 },
}

/// Absolute pixel geometry the pin depends on. Re-measured on every resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinGeometry {
    pub section_doc_top: f64,
    pub section_height: f64,
    pub viewport_w: f64,
    pub viewport_h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinFrame {
    pub state: PinState,
    /// 0 before the pin, 1 after release, strictly increasing in between.
    pub progress: f32,
    /// Distance the track has advanced, in pixels, `progress * distance`.
    pub track_offset: f64,
    /// Vertical offset for the pinned content while it is in normal flow:
    /// 0 before the pin and while pinned, `distance` once released at the end,
    /// so it stays where the fixed position left it.
    pub pin_offset_y: f64,
    /// Set when this update changed `state`.
    pub transition: Option<PinState>,
}

#[derive(Clone, Debug)]
pub struct PinController {
    span: PinSpan,
    geometry: PinGeometry,
    distance: f64,
    state: PinState,
}

impl PinController {
    pub fn new(span: PinSpan) -> Self {
        Self {
            span,
            geometry: PinGeometry::default(),
            distance: 0.0,
            state: PinState::Unpinned,
        }
    }

    /// Replace the geometry and recompute the pinned distance.
    pub fn invalidate(&mut self, geometry: PinGeometry) {
        self.geometry = geometry;
        self.distance = match self.span {
            PinSpan::Horizontal { track_len } => (track_len - geometry.viewport_w).max(0.0),
            PinSpan::Vertical { viewport_multiple } => {
                (viewport_multiple.max(0.0) * geometry.viewport_h).max(0.0)
            }
        };
        log::debug!(
            "[pin] invalidated: top={:.0} distance={:.0}",
            geometry.section_doc_top,
            self.distance
        );
    }

    /// Update the track length (e.g. panel count changed) and recompute.
    pub fn set_span(&mut self, span: PinSpan) {
        self.span = span;
        self.invalidate(self.geometry);
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn state(&self) -> PinState {
        self.state
    }

    pub fn pin_start(&self) -> f64 {
        self.geometry.section_doc_top
    }

    pub fn pin_end(&self) -> f64 {
        self.geometry.section_doc_top + self.distance
    }

    /// Pure progress for a scroll position; independent of scroll speed.
    pub fn progress_at(&self, scroll_y: f64) -> f32 {
        if self.distance <= f64::EPSILON {
            return if scroll_y >= self.pin_start() { 1.0 } else { 0.0 };
        }
        clamp_progress(((scroll_y - self.pin_start()) / self.distance) as f32)
    }

    pub fn update(&mut self, scroll_y: f64) -> PinFrame {
        let progress = self.progress_at(scroll_y);
        let reached_top = scroll_y >= self.pin_start();
        let track_done = scroll_y >= self.pin_end();
        let bottom_passed = scroll_y >= self.pin_start() + self.geometry.section_height.max(0.0)
            && self.geometry.section_height > 0.0;
        let next = if reached_top && !track_done && !bottom_passed && self.distance > 0.0 {
            PinState::Pinned
        } else {
            PinState::Unpinned
        };
        let transition = (next != self.state).then_some(next);
        if let Some(s) = transition {
            log::debug!("[pin] {:?} at scroll {:.0}", s, scroll_y);
        }
        self.state = next;
        let pin_offset_y = if next == PinState::Unpinned && reached_top {
            self.distance
        } else {
            0.0
        };
        PinFrame {
            state: next,
            progress,
            track_offset: progress as f64 * self.distance,
            pin_offset_y,
            transition,
        }
    }
}

/// Eases a displayed value toward its scroll-derived target with a fixed lag
/// (GSAP-style `scrub`). The target stays time-invariant; only the rendered
/// value trails it.
#[derive(Clone, Copy, Debug)]
pub struct ScrubFollower {
    lag_sec: f32,
    current: f64,
    initialized: bool,
}

impl ScrubFollower {
    pub fn new(lag_sec: f32) -> Self {
        Self {
            lag_sec,
            current: 0.0,
            initialized: false,
        }
    }

    pub fn step(&mut self, target: f64, dt_sec: f32) -> f64 {
        if !self.initialized || self.lag_sec <= 0.0 {
            self.current = target;
            self.initialized = true;
            return self.current;
        }
        let alpha = 1.0 - (-(dt_sec.max(0.0)) / self.lag_sec).exp();
        self.current += (target - self.current) * alpha as f64;
        if (target - self.current).abs() < 0.01 {
            self.current = target;
        }
        self.current
    }

    /// Jump straight to `value`, used after a resize invalidation.
    pub fn reset(&mut self, value: f64) {
        self.current = value;
        self.initialized = true;
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }
}
