//! Transition tables and a generic tween runner.
//!
//! A table maps each visual state to target values plus the transition used
//! to reach them. The runner owns the per-channel interpolation and is driven
//! by frame timestamps, so the same table works for any element.

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    ExpoOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Curtain-style in/out used by the menu and preloader.
    pub const CURTAIN: Easing = Easing::CubicBezier(0.76, 0.0, 0.24, 1.0);
    /// Soft deceleration used by link reveals.
    pub const SOFT_OUT: Easing = Easing::CubicBezier(0.215, 0.61, 0.355, 1.0);
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExpoOut => crate::scroll::ease_out_expo(t as f64) as f32,
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }
}

#[inline]
fn bezier_coord(a: f32, b: f32, s: f32) -> f32 {
    // Endpoints fixed at 0 and 1.
    let u = 1.0 - s;
    3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
}

#[inline]
fn bezier_slope(a: f32, b: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a + 6.0 * u * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

fn bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier_coord(y1, y2, s);
        }
        let d = bezier_slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }
    // Newton stalled on a flat section; bisect instead.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let v = bezier_coord(x1, x2, s);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_coord(y1, y2, s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_sec: f32, easing: Easing) -> Self {
        Self {
            duration_sec,
            delay_sec: 0.0,
            easing,
        }
    }

    pub const fn delayed(mut self, delay_sec: f32) -> Self {
        self.delay_sec = delay_sec;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Variant<K> {
    pub targets: SmallVec<[(K, f32); 4]>,
    pub transition: Transition,
}

impl<K: Copy> Variant<K> {
    pub fn new(targets: &[(K, f32)], transition: Transition) -> Self {
        Self {
            targets: targets.iter().copied().collect(),
            transition,
        }
    }
}

/// state → {targets, transition}
#[derive(Clone, Debug)]
pub struct VariantTable<S, K> {
    entries: Vec<(S, Variant<K>)>,
}

impl<S: Copy + PartialEq, K: Copy> VariantTable<S, K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, state: S, variant: Variant<K>) -> Self {
        self.entries.retain(|(s, _)| *s != state);
        self.entries.push((state, variant));
        self
    }

    pub fn get(&self, state: S) -> Option<&Variant<K>> {
        self.entries
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, v)| v)
    }
}

impl<S: Copy + PartialEq, K: Copy> Default for VariantTable<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
struct Track {
    from: f32,
    to: f32,
    start_sec: f64,
    transition: Transition,
    current: f32,
}

impl Track {
    fn sample(&mut self, now_sec: f64) -> bool {
        let d = self.transition.duration_sec as f64;
        let t = if d > 0.0 {
            ((now_sec - self.start_sec) / d) as f32
        } else if now_sec >= self.start_sec {
            1.0
        } else {
            0.0
        };
        let e = self.transition.easing.apply(t);
        self.current = self.from + (self.to - self.from) * e;
        t < 1.0
    }
}

/// Drives the channels of one element through a `VariantTable`.
#[derive(Clone, Debug)]
pub struct TweenRunner<S, K: Hash + Eq> {
    table: VariantTable<S, K>,
    state: Option<S>,
    tracks: FnvHashMap<K, Track>,
}

impl<S, K> TweenRunner<S, K>
where
    S: Copy + PartialEq,
    K: Copy + Hash + Eq,
{
    pub fn new(table: VariantTable<S, K>) -> Self {
        Self {
            table,
            state: None,
            tracks: FnvHashMap::default(),
        }
    }

    pub fn state(&self) -> Option<S> {
        self.state
    }

    /// Swap the table (e.g. viewport-dependent targets) and snap to the
    /// current state's new targets.
    pub fn set_table(&mut self, table: VariantTable<S, K>) {
        self.table = table;
        if let Some(s) = self.state {
            self.set(s);
        }
    }

    /// Jump to `state` with no animation.
    pub fn set(&mut self, state: S) {
        let Some(v) = self.table.get(state) else {
            return;
        };
        for (k, target) in &v.targets {
            self.tracks.insert(
                *k,
                Track {
                    from: *target,
                    to: *target,
                    start_sec: 0.0,
                    transition: Transition::new(0.0, Easing::Linear),
                    current: *target,
                },
            );
        }
        self.state = Some(state);
    }

    /// Start animating towards `state` at `now_sec`.
    pub fn go_to(&mut self, state: S, now_sec: f64) {
        self.go_to_staggered(state, now_sec, 0.0);
    }

    /// Like `go_to` with an extra delay (list staggering).
    pub fn go_to_staggered(&mut self, state: S, now_sec: f64, extra_delay_sec: f32) {
        if self.state == Some(state) {
            return;
        }
        let Some(v) = self.table.get(state) else {
            return;
        };
        let transition = v.transition;
        let start_sec = now_sec + (transition.delay_sec + extra_delay_sec) as f64;
        for (k, target) in &v.targets {
            let from = self.tracks.get(k).map(|t| t.current).unwrap_or(*target);
            self.tracks.insert(
                *k,
                Track {
                    from,
                    to: *target,
                    start_sec,
                    transition,
                    current: from,
                },
            );
        }
        self.state = Some(state);
    }

    /// Sample every channel at `now_sec`. Returns true while any is moving.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        let mut moving = false;
        for t in self.tracks.values_mut() {
            moving |= t.sample(now_sec);
        }
        moving
    }

    pub fn value(&self, key: K) -> Option<f32> {
        self.tracks.get(&key).map(|t| t.current)
    }
}
