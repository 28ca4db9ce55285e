//! Simulation frame counter.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter, one tick
//! per rendered frame.  Integration is per-tick, not per-elapsed-second:
//! there is deliberately no delta-time scaling, so a run is reproducible
//! regardless of how fast the host machine presents frames.  Wall-clock
//! pacing is a presentation concern and lives with the simulation driver.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
///
/// Stored as `u64` to avoid overflow: at 60 frames per second a u64 lasts
/// ~9.7 billion years, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` frames after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and converts tick counts to simulated seconds.
///
/// `FrameClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Target presentation rate.  `None` means unpaced (run flat out).
    pub target_fps: Option<u32>,
    /// The current frame — advanced by `FrameClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl FrameClock {
    /// Create a clock at tick 0 with the given target rate.
    pub fn new(target_fps: Option<u32>) -> Self {
        Self {
            target_fps,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal simulated seconds since tick 0 at the target rate.
    ///
    /// Returns `None` when the clock is unpaced — elapsed frames then have no
    /// wall-time meaning.
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.target_fps
            .map(|fps| self.current_tick.0 as f64 / fps as f64)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elapsed_secs() {
            Some(secs) => write!(f, "{} ({secs:.2}s)", self.current_tick),
            None       => write!(f, "{}", self.current_tick),
        }
    }
}
