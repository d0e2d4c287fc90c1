//! Scroll progress over a tracked container.

use crate::mapper::clamp_progress;
use crate::signal::Signal;

/// Edge of an element or of the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// "target edge meets viewport edge".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }
}

/// Pair of intersections where progress is 0 and 1 respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffsets {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffsets {
    /// `["start start", "end end"]`: container fully traversed while it
    /// covers the viewport.
    pub const CONTAIN: Self = Self {
        start: Intersection::new(Edge::Start, Edge::Start),
        end: Intersection::new(Edge::End, Edge::End),
    };
    /// `["start end", "end end"]`: from first appearance at the bottom until
    /// its bottom edge is reached.
    pub const ENTER: Self = Self {
        start: Intersection::new(Edge::Start, Edge::End),
        end: Intersection::new(Edge::End, Edge::End),
    };
    /// `["start end", "start start"]`: while its top edge travels the viewport.
    pub const APPROACH: Self = Self {
        start: Intersection::new(Edge::Start, Edge::End),
        end: Intersection::new(Edge::Start, Edge::Start),
    };
}

/// Container geometry in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetRect {
    pub doc_top: f64,
    pub height: f64,
}

impl TargetRect {
    /// Build from a viewport-relative bounding rect top and the current scroll.
    pub fn from_client(client_top: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            doc_top: client_top + scroll_y,
            height: height.max(0.0),
        }
    }
}

/// Scroll offset at which `at` is satisfied.
#[inline]
fn scroll_at(at: Intersection, target: TargetRect, viewport_h: f64) -> f64 {
    target.doc_top + at.target.fraction() * target.height - at.viewport.fraction() * viewport_h
}

/// Pure progress computation; clamped to [0, 1].
pub fn progress_for(
    offsets: ScrollOffsets,
    target: TargetRect,
    viewport_h: f64,
    scroll_y: f64,
) -> f32 {
    let s0 = scroll_at(offsets.start, target, viewport_h.max(0.0));
    let s1 = scroll_at(offsets.end, target, viewport_h.max(0.0));
    let span = s1 - s0;
    if span <= f64::EPSILON {
        // Degenerate range (e.g. a zero-height measurement mid-resize).
        return if scroll_y >= s1 { 1.0 } else { 0.0 };
    }
    clamp_progress(((scroll_y - s0) / span) as f32)
}

/// Owns the progress signal of one tracked container.
#[derive(Debug)]
pub struct ScrollTracker {
    offsets: ScrollOffsets,
    target: TargetRect,
    viewport_h: f64,
    signal: Signal,
}

impl ScrollTracker {
    pub fn new(offsets: ScrollOffsets) -> Self {
        Self {
            offsets,
            target: TargetRect::default(),
            viewport_h: 0.0,
            signal: Signal::new(0.0),
        }
    }

    /// Store fresh geometry (resize, layout shift).
    pub fn measure(&mut self, target: TargetRect, viewport_h: f64) {
        self.target = target;
        self.viewport_h = viewport_h;
    }

    /// Recompute progress for `scroll_y` and publish it. Returns the progress.
    pub fn update(&mut self, scroll_y: f64) -> f32 {
        let p = progress_for(self.offsets, self.target, self.viewport_h, scroll_y);
        self.signal.set(p);
        p
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.signal.get()
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn signal_mut(&mut self) -> &mut Signal {
        &mut self.signal
    }

    pub fn target(&self) -> TargetRect {
        self.target
    }
}
