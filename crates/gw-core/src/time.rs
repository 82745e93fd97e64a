//! Simulation time and scoring units.
//!
//! # Design
//!
//! Time is a bare `Tick` counter with no wall-clock mapping: the problem is
//! defined entirely in ticks, and the horizon (the exclusive upper bound of
//! simulated time) arrives as an input constant.  Absolute instants are
//! `Tick`; durations (green windows, street traversal times, the horizon
//! itself) are plain `u64`, so `instant + duration` arithmetic is exact and
//! comparisons are O(1).

use std::fmt;

/// Points awarded by the simulator: a fixed bonus per completed vehicle plus
/// one point per tick of early arrival.
pub type Score = u64;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`; horizons in practice are well below 10⁷ ticks, but the
/// wide type keeps sums of durations trivially overflow-free.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
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
        write!(f, "T{}", self.0)
    }
}
