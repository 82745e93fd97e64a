//! One intersection's cyclic signal schedule.
//!
//! # Cycle model
//!
//! A schedule is an ordered list of [`GreenSlot`]s.  The cycle period is the
//! sum of all green durations; at any simulation tick `t`, the position
//! within the cycle is
//!
//! ```text
//! cycle_pos = t mod duration
//! ```
//!
//! and the green street is the slot whose cumulative-duration window contains
//! `cycle_pos`.  Exactly one incoming street is green at any instant; every
//! other incoming street is red.
//!
//! Slot order matters: permuting slots keeps the total duration but shifts
//! which street is green when, which changes how queued vehicles interleave.

use gw_core::{IntersectionId, StreetId, Tick};

// ── GreenSlot ─────────────────────────────────────────────────────────────────

/// One green window within a schedule's cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreenSlot {
    /// The incoming street that gets the green light.
    pub street: StreetId,
    /// Window length in ticks.  Always ≥ 1 in a valid schedule.
    pub green: u64,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A cyclic signal schedule for one intersection.
///
/// Fields are `pub`: the optimizer mutates slot durations and order in place,
/// then [`Solution::validate`](crate::Solution::validate) is the arbiter of
/// consistency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// The intersection this schedule controls.
    pub intersection: IntersectionId,
    /// Green windows in cycle order.
    pub slots: Vec<GreenSlot>,
}

impl Schedule {
    /// An empty schedule for `intersection`; fill `slots` before use.
    pub fn new(intersection: IntersectionId) -> Self {
        Self { intersection, slots: Vec::new() }
    }

    /// Total cycle length: the sum of all green durations.
    /// O(schedule size).
    #[inline]
    pub fn duration(&self) -> u64 {
        self.slots.iter().map(|slot| slot.green).sum()
    }

    /// The street whose green window contains tick `now`.
    ///
    /// # Panics
    ///
    /// Panics on a schedule with zero total duration (the modulo divides by
    /// it).  Validation rejects empty and zero-green schedules before any
    /// simulation, so reaching the panic means a caller skipped validation.
    pub fn green_at(&self, now: Tick) -> StreetId {
        let duration = self.duration();
        debug_assert!(duration > 0, "green_at on a schedule with no green time");
        let mut pos = now.0 % duration;
        for slot in &self.slots {
            if pos < slot.green {
                return slot.street;
            }
            pos -= slot.green;
        }
        unreachable!("cycle position beyond schedule duration {duration}")
    }

    /// Index of the slot giving `street` its green window, if any.
    pub fn slot_serving(&self, street: StreetId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.street == street)
    }
}
