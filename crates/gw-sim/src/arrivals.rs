//! `ArrivalQueue` — sparse per-tick vehicle arrival registry.
//!
//! # Why this exists
//!
//! A vehicle spends most of the horizon either waiting at a semaphore or in
//! the middle of a multi-tick street traversal.  Scanning the whole fleet
//! every tick to ask "did anyone just finish a street?" would cost O(V) per
//! tick regardless of how many traversals actually end.
//!
//! `ArrivalQueue` inverts the problem: when the simulator releases a vehicle
//! onto its next street, it registers the tick at which that traversal ends.
//! Each tick the loop drains only that tick's arrivals — O(arrived) work.
//!
//! Within one tick, arrivals keep their registration order.  The order in
//! which vehicles join a street queue on the same tick decides their FIFO
//! position, so it is part of the observable behavior and must not depend on
//! any map's iteration order.

use std::collections::BTreeMap;

use gw_core::{Tick, VehicleId};

/// One pending arrival: `vehicle` finishes driving the street at path index
/// `leg` and joins that street's queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub vehicle: VehicleId,
    /// Index into the vehicle's path of the street it is arriving on.
    pub leg: usize,
}

/// Maps simulation ticks → vehicles whose street traversal ends at that tick.
#[derive(Default)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<Arrival>>,
    /// Cached total arrival count for O(1) `len()`.
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `arrival` for `tick`.  Arrivals registered for the same tick
    /// drain in registration order.
    pub fn push(&mut self, tick: Tick, arrival: Arrival) {
        self.inner.entry(tick).or_default().push(arrival);
        self.total += 1;
    }

    /// Remove and return all arrivals registered for exactly `tick`.
    ///
    /// Returns `None` if nothing arrives at that tick (common case for most
    /// ticks — avoids allocation).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Arrival>> {
        let arrivals = self.inner.remove(&tick)?;
        self.total -= arrivals.len();
        Some(arrivals)
    }

    /// Total number of pending arrivals across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
