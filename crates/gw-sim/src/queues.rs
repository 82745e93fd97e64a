//! Per-street FIFO queues with an explicit capacity bound.

use std::collections::VecDeque;

use gw_core::{StreetId, VehicleId};

use crate::error::{SimError, SimResult};

/// One bounded FIFO queue per street, holding the vehicles waiting at that
/// street's semaphore.
///
/// Capacity is a fixed bound chosen by the caller (the simulator passes the
/// fleet size — a vehicle occupies at most one queue at any instant, so no
/// valid run can exceed it).  [`push`](Self::push) fails rather than growing
/// past the bound or dropping the vehicle.
pub struct StreetQueues {
    queues:   Vec<VecDeque<VehicleId>>,
    capacity: usize,
}

impl StreetQueues {
    /// One empty queue per street, each bounded by `capacity` vehicles.
    ///
    /// Backing buffers start unallocated; a street only pays for storage once
    /// a vehicle actually waits there.
    pub fn new(street_count: usize, capacity: usize) -> Self {
        Self {
            queues: (0..street_count).map(|_| VecDeque::new()).collect(),
            capacity,
        }
    }

    /// Append `vehicle` to the back of `street`'s queue.
    pub fn push(&mut self, street: StreetId, vehicle: VehicleId) -> SimResult<()> {
        let queue = &mut self.queues[street.index()];
        if queue.len() >= self.capacity {
            return Err(SimError::QueueOverflow { street, capacity: self.capacity });
        }
        queue.push_back(vehicle);
        Ok(())
    }

    /// Remove and return the vehicle at the front of `street`'s queue.
    #[inline]
    pub fn pop(&mut self, street: StreetId) -> Option<VehicleId> {
        self.queues[street.index()].pop_front()
    }

    /// Number of vehicles currently waiting at `street`.
    #[inline]
    pub fn depth(&self, street: StreetId) -> usize {
        self.queues[street.index()].len()
    }

    pub fn street_count(&self) -> usize {
        self.queues.len()
    }
}
