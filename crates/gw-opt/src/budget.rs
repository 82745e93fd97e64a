//! Wall-clock budgets for the search loops.

use std::time::{Duration, Instant};

/// A wall-clock deadline polled between search moves.
///
/// Deadlines are cooperative: nothing interrupts a running simulation, the
/// strategies simply stop starting new moves once [`expired`](Self::expired)
/// turns true.  A single simulation run is bounded by the horizon, so the
/// overshoot past the deadline is bounded too.
#[derive(Copy, Clone, Debug)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// A deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self { end: Instant::now() + budget }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.end
    }

    /// Time left before the deadline; zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }

    /// A nested deadline `budget` from now, clipped so it can never outlive
    /// this one.  Sub-passes inside a strategy use this to spend a slice of
    /// the outer budget without overrunning it.
    pub fn sub_budget(&self, budget: Duration) -> Deadline {
        Deadline::after(budget.min(self.remaining()))
    }
}
