//! Scroll-driven presets for the page sections.
//!
//! Each preset is a bundle of `TransformSet`s fed by one tracker's progress.

use crate::error::Result;
use crate::mapper::{clamp_progress, Breakpoints, Property, TransformSet};
use smallvec::SmallVec;

/// Hero zooms out and tilts away while the about panel zooms in over it.
#[derive(Clone, Debug)]
pub struct HeroAbout {
    pub hero: TransformSet,
    pub about: TransformSet,
}

impl HeroAbout {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hero: TransformSet::new()
                .with(Property::Scale, Breakpoints::linear([0.0, 1.0], [1.0, 0.8])?)
                .with(Property::RotateDeg, Breakpoints::linear([0.0, 1.0], [0.0, -5.0])?),
            about: TransformSet::new()
                .with(Property::Scale, Breakpoints::linear([0.0, 1.0], [0.8, 1.0])?)
                .with(Property::RotateDeg, Breakpoints::linear([0.0, 1.0], [5.0, 0.0])?),
        })
    }

    pub fn apply(&mut self, progress: f32) -> bool {
        let a = self.hero.apply(progress);
        let b = self.about.apply(progress);
        a || b
    }
}

/// Reveal windows of the five journey milestones along the path.
pub const MILESTONE_WINDOWS: [[f32; 2]; 5] = [
    [0.0, 0.08],
    [0.18, 0.26],
    [0.38, 0.46],
    [0.65, 0.73],
    [0.85, 0.93],
];

/// Progress at which the journey path is fully drawn.
pub const PATH_COMPLETE_AT: f32 = 0.93;

/// Journey path drawing plus one pop-in per milestone.
#[derive(Clone, Debug)]
pub struct Timeline {
    pub path: TransformSet,
    pub milestones: Vec<TransformSet>,
}

impl Timeline {
    pub fn new() -> Result<Self> {
        let path = TransformSet::new().with(
            Property::PathLength,
            Breakpoints::linear([0.0, PATH_COMPLETE_AT], [0.0, 1.0])?,
        );
        let milestones = MILESTONE_WINDOWS
            .iter()
            .map(|w| {
                Ok(TransformSet::new()
                    .with(Property::Scale, Breakpoints::linear(*w, [0.0, 1.0])?)
                    .with(Property::Opacity, Breakpoints::linear(*w, [0.0, 1.0])?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { path, milestones })
    }

    pub fn apply(&mut self, progress: f32) -> bool {
        let mut changed = self.path.apply(progress);
        for m in &mut self.milestones {
            changed |= m.apply(progress);
        }
        changed
    }

    /// Number of milestones fully revealed at the last applied progress.
    pub fn revealed(&self) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.value(Property::Opacity).unwrap_or(0.0) >= 1.0)
            .count()
    }
}

/// Marquee text running along a curve, plus the caption that slides up
/// beneath it.
#[derive(Clone, Debug)]
pub struct TextAlongPath {
    copies: usize,
    pub caption: TransformSet,
}

impl TextAlongPath {
    pub fn new(copies: usize) -> Result<Self> {
        Ok(Self {
            copies: copies.max(1),
            caption: TransformSet::new().with(
                Property::TranslateY,
                Breakpoints::linear([0.0, 1.0], [-700.0, 0.0])?,
            ),
        })
    }

    /// `startOffset` percentage for each text copy.
    pub fn offsets(&self, progress: f32) -> SmallVec<[f32; 4]> {
        let p = clamp_progress(progress);
        let spacing = 100.0 / self.copies as f32;
        (0..self.copies)
            .map(|i| -spacing + i as f32 * spacing + p * spacing)
            .collect()
    }

    pub fn copies(&self) -> usize {
        self.copies
    }
}

/// Per-card share of the section progress before a card starts shrinking.
pub const CARD_RANGE_STEP: f32 = 0.25;
/// Scale lost per card still stacked above.
pub const CARD_SCALE_STEP: f32 = 0.05;

/// Stacking project cards: earlier cards shrink as later ones slide over.
#[derive(Clone, Debug)]
pub struct CardStack {
    pub cards: Vec<TransformSet>,
}

impl CardStack {
    pub fn new(count: usize) -> Result<Self> {
        let cards = (0..count)
            .map(|i| {
                let target = 1.0 - (count - i) as f32 * CARD_SCALE_STEP;
                let start = i as f32 * CARD_RANGE_STEP;
                // A card whose range would start at the end never shrinks.
                let mapping = if start < 1.0 {
                    Breakpoints::linear([start, 1.0], [1.0, target])?
                } else {
                    Breakpoints::linear([0.0, 1.0], [1.0, 1.0])?
                };
                Ok(TransformSet::new().with(Property::Scale, mapping))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cards })
    }

    pub fn apply(&mut self, progress: f32) -> bool {
        let mut changed = false;
        for c in &mut self.cards {
            changed |= c.apply(progress);
        }
        changed
    }

    pub fn scale(&self, index: usize) -> f32 {
        self.cards
            .get(index)
            .and_then(|c| c.value(Property::Scale))
            .unwrap_or(1.0)
    }
}

/// Card image zooms from 2x to 1x while its card approaches the top.
pub fn card_image_zoom() -> Result<TransformSet> {
    Ok(TransformSet::new().with(Property::Scale, Breakpoints::linear([0.0, 1.0], [2.0, 1.0])?))
}
