//! Auto-cycling gallery used instead of the mouse trail on small layouts.

use crate::constants::{
    CAROUSEL_INTERVAL_MS, CAROUSEL_POS_MIN_PCT, CAROUSEL_POS_SPAN_PCT, CAROUSEL_VISIBLE_DEPTH,
};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    /// Current image plus this many minus one behind it are shown.
    pub visible_depth: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: CAROUSEL_INTERVAL_MS,
            visible_depth: CAROUSEL_VISIBLE_DEPTH,
        }
    }
}

/// Target style of one visible image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselFrame {
    /// Position in percent of the container, image centred on it.
    pub position_pct: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub z: u32,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    positions: Vec<Vec2>,
    current: usize,
}

fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        CAROUSEL_POS_MIN_PCT + rng.gen::<f32>() * CAROUSEL_POS_SPAN_PCT,
        CAROUSEL_POS_MIN_PCT + rng.gen::<f32>() * CAROUSEL_POS_SPAN_PCT,
    )
}

impl Carousel {
    pub fn new<R: Rng + ?Sized>(config: CarouselConfig, images: usize, rng: &mut R) -> Self {
        Self {
            config,
            positions: (0..images).map(|_| random_position(rng)).collect(),
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn interval_ms(&self) -> u32 {
        self.config.interval_ms
    }

    /// Interval tick: move to the next image and give it a fresh position.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.positions.is_empty() {
            return 0;
        }
        self.current = (self.current + 1) % self.positions.len();
        self.positions[self.current] = random_position(rng);
        self.current
    }

    /// Dot click.
    pub fn select(&mut self, index: usize) {
        if index < self.positions.len() {
            self.current = index;
        }
    }

    /// Ring distance from the current image back to `index`.
    pub fn distance(&self, index: usize) -> usize {
        let n = self.positions.len();
        if n == 0 {
            return 0;
        }
        (self.current + n - index % n) % n
    }

    /// Style for `index`, or `None` when it should be hidden.
    pub fn frame(&self, index: usize) -> Option<CarouselFrame> {
        if index >= self.positions.len() {
            return None;
        }
        let d = self.distance(index);
        if d >= self.config.visible_depth {
            return None;
        }
        let (opacity, scale) = if d == 0 {
            (1.0, 1.0)
        } else {
            (0.6 - d as f32 * 0.2, 0.85 - d as f32 * 0.1)
        };
        Some(CarouselFrame {
            position_pct: self.positions[index],
            opacity,
            scale,
            z: (self.positions.len() - d) as u32,
        })
    }
}
