//! Network-model error type.

use thiserror::Error;

use gw_core::{IntersectionId, StreetId, VehicleId};

/// Errors produced while building a `Network`.
///
/// All of these indicate malformed input; none are recoverable.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("street {name:?} references intersection {intersection} but only {count} exist")]
    EndpointOutOfRange {
        name:         String,
        intersection: IntersectionId,
        count:        usize,
    },

    #[error("street {name:?} has a traversal time of 0 ticks")]
    ZeroLengthStreet { name: String },

    #[error("street name {0:?} declared twice")]
    DuplicateStreetName(String),

    #[error("vehicle {vehicle} has a path of {len} streets; at least 2 are required")]
    PathTooShort { vehicle: VehicleId, len: usize },

    #[error("vehicle {vehicle} references unknown street {street}")]
    StreetOutOfRange { vehicle: VehicleId, street: StreetId },

    #[error("vehicle {vehicle}: street {street:?} ends at a different intersection than {next:?} begins")]
    DisconnectedPath {
        vehicle: VehicleId,
        street:  String,
        next:    String,
    },

    #[error("vehicle {vehicle} travels street {street:?} twice")]
    RepeatedStreet { vehicle: VehicleId, street: String },
}

pub type NetResult<T> = Result<T, NetError>;
