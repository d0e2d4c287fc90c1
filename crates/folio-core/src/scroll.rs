//! Eased page scrolling that replaces native wheel/touch/anchor jumps.

use crate::constants::{
    ANCHOR_DURATION_SEC, SCROLL_DURATION_SEC, TOUCH_MULTIPLIER, WHEEL_MULTIPLIER,
};

/// Exponential ease-out, `1 - 2^(-10t)`, clamped to [0, 1].
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (1.0 - 2f64.powf(-10.0 * t)).min(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollConfig {
    pub duration_sec: f64,
    pub anchor_duration_sec: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_sec: SCROLL_DURATION_SEC,
            anchor_duration_sec: ANCHOR_DURATION_SEC,
            wheel_multiplier: WHEEL_MULTIPLIER,
            touch_multiplier: TOUCH_MULTIPLIER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    duration_sec: f64,
    /// Stamped by the first frame after the tween was queued.
    started_at: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    animated: f64,
    target: f64,
    limit: f64,
    tween: Option<Tween>,
    destroyed: bool,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig, initial: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let initial = initial.clamp(0.0, limit);
        Self {
            config,
            animated: initial,
            target: initial,
            limit,
            tween: None,
            destroyed: false,
        }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    /// Current eased offset.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.animated
    }

    /// Offset the current animation is heading to.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Maximum scroll offset changed (document or viewport resize).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.animated = self.animated.clamp(0.0, self.limit);
        if let Some(t) = self.tween.as_mut() {
            t.to = t.to.clamp(0.0, self.limit);
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.nudge(delta_y * self.config.wheel_multiplier);
    }

    pub fn on_touch(&mut self, delta_y: f64) {
        self.nudge(delta_y * self.config.touch_multiplier);
    }

    fn nudge(&mut self, delta: f64) {
        if self.destroyed || !delta.is_finite() || delta == 0.0 {
            return;
        }
        let to = (self.target + delta).clamp(0.0, self.limit);
        self.animate_to(to, self.config.duration_sec);
    }

    /// Animate to an absolute offset over the anchor duration.
    ///
    /// Repeating the call with the same target while the animation runs keeps
    /// the running tween, so the final offset is the same as for one call.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_to_with(offset, self.config.anchor_duration_sec);
    }

    pub fn scroll_to_with(&mut self, offset: f64, duration_sec: f64) {
        if self.destroyed || !offset.is_finite() {
            return;
        }
        let to = offset.clamp(0.0, self.limit);
        if let Some(t) = &self.tween {
            if t.to == to {
                return;
            }
        } else if self.animated == to {
            self.target = to;
            return;
        }
        self.animate_to(to, duration_sec);
    }

    /// Jump without easing (e.g. reset to top when the preloader exits).
    pub fn jump_to(&mut self, offset: f64) {
        let to = offset.clamp(0.0, self.limit);
        self.tween = None;
        self.animated = to;
        self.target = to;
    }

    /// Native scroll happened outside our control (scrollbar drag, keyboard).
    pub fn sync_native(&mut self, offset: f64) {
        if self.tween.is_none() && offset.is_finite() {
            self.jump_to(offset);
        }
    }

    fn animate_to(&mut self, to: f64, duration_sec: f64) {
        self.target = to;
        self.tween = Some(Tween {
            from: self.animated,
            to,
            duration_sec: duration_sec.max(0.0),
            started_at: None,
        });
    }

    /// Advance to frame time `now_sec`. Returns the new offset when it moved.
    pub fn raf(&mut self, now_sec: f64) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        let tween = self.tween.as_mut()?;
        let start = *tween.started_at.get_or_insert(now_sec);
        let t = if tween.duration_sec > 0.0 {
            (now_sec - start) / tween.duration_sec
        } else {
            1.0
        };
        let before = self.animated;
        if t >= 1.0 {
            self.animated = tween.to;
            self.tween = None;
        } else {
            self.animated = tween.from + (tween.to - tween.from) * ease_out_expo(t);
        }
        (self.animated != before).then_some(self.animated)
    }

    /// Stop for good; later input and frames are ignored.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.tween = None;
    }
}
