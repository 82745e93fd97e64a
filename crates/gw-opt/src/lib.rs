//! `gw-opt` — time-boxed local search over signal schedules.
//!
//! # Strategies
//!
//! | Strategy                      | Move                                      |
//! |-------------------------------|-------------------------------------------|
//! | [`Optimizer::hill_climb`]     | widen one green slot while it keeps paying |
//! | [`Optimizer::jam_targeted`]   | widen the slots serving the worst jams     |
//! | [`Optimizer::random_restart`] | greedy bursts mixed with slot shuffles     |
//!
//! All three share one discipline: snapshot the schedules a move will touch,
//! mutate, re-simulate, and restore the snapshot unless the new score
//! justifies keeping the move.  The simulator is the only oracle — no
//! strategy reasons about the network beyond what a
//! [`SimReport`](gw_sim::SimReport) tells it.
//!
//! Budgets are wall-clock and cooperative: the [`Deadline`] is polled between
//! moves, never inside a simulation run, so an expiring budget always leaves
//! the solution in a fully committed-or-reverted state.

pub mod budget;
pub mod error;
pub mod optimizer;
pub mod snapshot;


pub use budget::Deadline;
pub use error::{OptError, OptResult};
pub use optimizer::{Optimizer, Strategy};
pub use snapshot::Snapshot;
