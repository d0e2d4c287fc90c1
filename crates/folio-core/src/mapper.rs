//! Progress → visual property mapping.

use crate::error::{FolioError, Result};
use smallvec::SmallVec;

/// Ordered `(input, output)` pairs with strictly increasing inputs.
///
/// Sampling interpolates linearly between the bracketing pair and clamps to
/// the first/last output outside the covered input range.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    points: SmallVec<[(f32, f32); 4]>,
}

impl Breakpoints {
    pub fn new(points: &[(f32, f32)]) -> Result<Self> {
        if points.len() < 2 {
            return Err(FolioError::TooFewBreakpoints(points.len()));
        }
        for (i, (x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(FolioError::NonFiniteBreakpoint(i));
            }
        }
        for i in 1..points.len() {
            let prev = points[i - 1].0;
            let next = points[i].0;
            if next <= prev {
                return Err(FolioError::UnorderedBreakpoints { index: i, prev, next });
            }
        }
        Ok(Self {
            points: points.iter().copied().collect(),
        })
    }

    /// Two-point mapping, the shape almost every preset uses.
    pub fn linear(input: [f32; 2], output: [f32; 2]) -> Result<Self> {
        Self::new(&[(input[0], output[0]), (input[1], output[1])])
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn sample(&self, p: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if p.is_nan() || p <= first.0 {
            return first.1;
        }
        if p >= last.0 {
            return last.1;
        }
        // Few points per mapping; a linear scan beats a binary search here.
        for w in self.points.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if p <= x1 {
                let t = (p - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last.1
    }
}

/// Clamp a raw progress sample into [0, 1]; NaN collapses to 0.
#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Visual property a mapping drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Scale,
    RotateDeg,
    Opacity,
    PathLength,
    TranslateX,
    TranslateY,
    StartOffsetPct,
}

impl Property {
    pub fn css_unit(self) -> &'static str {
        match self {
            Property::RotateDeg => "deg",
            Property::TranslateX | Property::TranslateY => "px",
            Property::StartOffsetPct => "%",
            Property::Scale | Property::Opacity | Property::PathLength => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub property: Property,
    pub mapping: Breakpoints,
}

impl Transform {
    pub fn new(property: Property, mapping: Breakpoints) -> Self {
        Self { property, mapping }
    }
}

/// Several mappings fed by one progress sample.
///
/// `apply` clamps the sample once and evaluates every mapping against it;
/// the outputs are cached so readers between scroll events pay nothing.
#[derive(Clone, Debug, Default)]
pub struct TransformSet {
    transforms: Vec<Transform>,
    outputs: Vec<f32>,
    last_progress: Option<f32>,
}

impl TransformSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, mapping: Breakpoints) -> Self {
        self.push(Transform::new(property, mapping));
        self
    }

    pub fn push(&mut self, t: Transform) {
        self.outputs.push(t.mapping.sample(0.0));
        self.transforms.push(t);
        self.last_progress = None;
    }

    /// Re-evaluate all mappings. Returns false when `progress` clamps to the
    /// value already applied.
    pub fn apply(&mut self, progress: f32) -> bool {
        let p = clamp_progress(progress);
        if self.last_progress == Some(p) {
            return false;
        }
        for (out, t) in self.outputs.iter_mut().zip(&self.transforms) {
            *out = t.mapping.sample(p);
        }
        self.last_progress = Some(p);
        true
    }

    pub fn value(&self, property: Property) -> Option<f32> {
        self.transforms
            .iter()
            .position(|t| t.property == property)
            .map(|i| self.outputs[i])
    }

    pub fn values(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.transforms
            .iter()
            .zip(&self.outputs)
            .map(|(t, v)| (t.property, *v))
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}
