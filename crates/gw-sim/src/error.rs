use gw_core::{StreetId, VehicleId};
use gw_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The solution failed validation; it never reached the tick loop.
    #[error("invalid solution: {0}")]
    InvalidPlan(#[from] PlanError),

    /// A street queue exceeded its capacity bound.  The bound is the fleet
    /// size and a vehicle occupies at most one queue, so this signals an
    /// internal defect, not an input problem.
    #[error("queue for street {street} overflowed its capacity of {capacity}")]
    QueueOverflow { street: StreetId, capacity: usize },

    /// A released vehicle's path does not contain the street it was queued
    /// on.  Also a defect signal: arrivals are only ever registered for
    /// streets on the arriving vehicle's path.
    #[error("vehicle {vehicle} released from street {street} which is not on its path")]
    OffPath { vehicle: VehicleId, street: StreetId },
}

pub type SimResult<T> = Result<T, SimError>;
