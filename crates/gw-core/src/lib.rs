//! `gw-core` — foundational types for the `greenwave` signal toolkit.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                              |
//! |----------|-------------------------------------------------------|
//! | [`ids`]  | `StreetId`, `IntersectionId`, `VehicleId`             |
//! | [`time`] | `Tick`, the `Score` unit                              |
//! | [`rng`]  | `SearchRng` (seeded, per-instance derivable)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{IntersectionId, StreetId, VehicleId};
pub use rng::SearchRng;
pub use time::{Score, Tick};
