//! `gw-plan` — signal schedules and whole-network solutions.
//!
//! A [`Schedule`] is one intersection's cyclic sequence of green windows; a
//! [`Solution`] maps every intersection to its schedule (or to none, for
//! intersections no vehicle ever reaches).  Solutions are the unit the
//! optimizer mutates in place and the simulator evaluates.
//!
//! [`Solution::validate`] checks every schedule invariant against a network;
//! a solution that fails validation must never reach the simulator.

pub mod error;
pub mod schedule;
pub mod solution;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use schedule::{GreenSlot, Schedule};
pub use solution::Solution;
