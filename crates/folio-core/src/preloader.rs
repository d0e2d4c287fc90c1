//! Greeting word sequencer shown before the page is revealed.

use crate::constants::{
    PRELOADER_CURVE_BULGE_PX, PRELOADER_EXIT_HOLD_MS, PRELOADER_FIRST_DELAY_MS,
    PRELOADER_STEP_DELAY_MS,
};
use crate::error::{FolioError, Result};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderConfig {
    pub first_delay_ms: u32,
    pub step_delay_ms: u32,
    /// Time the last word stays up before the exit animation.
    pub exit_hold_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            first_delay_ms: PRELOADER_FIRST_DELAY_MS,
            step_delay_ms: PRELOADER_STEP_DELAY_MS,
            exit_hold_ms: PRELOADER_EXIT_HOLD_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Cycling,
    /// Last word reached; the host should unmount.
    Complete,
}

#[derive(Clone, Debug)]
pub struct Preloader {
    config: PreloaderConfig,
    words: Vec<String>,
    index: usize,
    phase: Phase,
    elapsed_ms: u64,
}

impl Preloader {
    pub fn new<S: Into<String>>(
        config: PreloaderConfig,
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(FolioError::EmptyWordList);
        }
        let phase = if words.len() == 1 {
            Phase::Complete
        } else {
            Phase::Cycling
        };
        Ok(Self {
            config,
            words,
            index: 0,
            phase,
            elapsed_ms: 0,
        })
    }

    pub fn word(&self) -> &str {
        &self.words[self.index]
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Scheduled time of the current word, counted from mount.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// How long the current word holds, or `None` in the terminal state.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_complete() {
            return None;
        }
        let ms = if self.index == 0 {
            self.config.first_delay_ms
        } else {
            self.config.step_delay_ms
        };
        Some(Duration::from_millis(ms as u64))
    }

    /// Timer fired: move to the next word. Returns the new phase.
    pub fn advance(&mut self) -> Phase {
        if let Some(d) = self.next_delay() {
            self.elapsed_ms += d.as_millis() as u64;
            self.index += 1;
            if self.index == self.words.len() - 1 {
                self.phase = Phase::Complete;
            }
        }
        self.phase
    }

    /// Total time from mount to the terminal word.
    pub fn total_duration(&self) -> Duration {
        if self.words.len() < 2 {
            return Duration::ZERO;
        }
        let steps = (self.words.len() - 2) as u64;
        Duration::from_millis(
            self.config.first_delay_ms as u64 + self.config.step_delay_ms as u64 * steps,
        )
    }

    /// Total time from mount until the host starts the exit animation.
    pub fn reveal_after(&self) -> Duration {
        self.total_duration() + Duration::from_millis(self.config.exit_hold_ms as u64)
    }
}

/// SVG path of the preloader's bottom edge: bulged while it is shown, flat
/// once it slides away.
pub fn curve_path(width: f64, height: f64, bulged: bool) -> String {
    let control_y = if bulged {
        height + PRELOADER_CURVE_BULGE_PX
    } else {
        height
    };
    format!(
        "M0 0 L{w} 0 L{w} {h} Q{cx} {cy} 0 {h} L0 0",
        w = width,
        h = height,
        cx = width / 2.0,
        cy = control_y
    )
}
