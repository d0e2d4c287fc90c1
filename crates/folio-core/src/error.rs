use thiserror::Error;

/// Construction-time validation failures for the core controllers.
///
/// Runtime input (scroll positions, pointer coordinates, viewport sizes) is
/// never an error: it is clamped instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("breakpoint mapping needs at least two points, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoint inputs must be strictly increasing (index {index}: {prev} >= {next})")]
    UnorderedBreakpoints { index: usize, prev: f32, next: f32 },
    #[error("breakpoint value at index {0} is not finite")]
    NonFiniteBreakpoint(usize),
    #[error("trail window of {max_visible} must be smaller than its {slots} slots")]
    InvalidTrail { slots: usize, max_visible: usize },
    #[error("trail step threshold must be positive, got {0}")]
    InvalidTrailStep(f32),
    #[error("invalid physics config: {0}")]
    InvalidPhysics(&'static str),
    #[error("preloader needs at least one word")]
    EmptyWordList,
}

pub type Result<T> = std::result::Result<T, FolioError>;
