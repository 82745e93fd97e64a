//! Schedule/solution validation error type.

use thiserror::Error;

use gw_core::{IntersectionId, StreetId};

/// Invariant violations detected by [`Solution::validate`](crate::Solution::validate).
///
/// A solution carrying any of these must never be simulated.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("schedule stored under intersection {expected} says it belongs to {found}")]
    IntersectionMismatch {
        expected: IntersectionId,
        found:    IntersectionId,
    },

    #[error("intersection {0} does not exist in this network")]
    UnknownIntersection(IntersectionId),

    #[error("intersection {0} has an empty schedule")]
    EmptySchedule(IntersectionId),

    #[error("schedule for intersection {intersection} lists street {street}, which does not end there")]
    StreetNotIncoming {
        intersection: IntersectionId,
        street:       StreetId,
    },

    #[error("schedule for intersection {intersection} lists street {street} twice")]
    DuplicateStreet {
        intersection: IntersectionId,
        street:       StreetId,
    },

    #[error("schedule for intersection {intersection} gives street {street} a zero-tick green window")]
    ZeroGreen {
        intersection: IntersectionId,
        street:       StreetId,
    },

    #[error("schedule for intersection {intersection} lasts {duration} ticks, longer than the {horizon}-tick horizon")]
    OverHorizon {
        intersection: IntersectionId,
        duration:     u64,
        horizon:      u64,
    },
}

pub type PlanResult<T> = Result<T, PlanError>;
