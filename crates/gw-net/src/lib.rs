//! `gw-net` — the immutable street network model.
//!
//! A [`Network`] holds everything the problem instance declares: the horizon,
//! the per-completion bonus, every street, every vehicle path, and the
//! derived per-intersection incoming/outgoing street lists.  It is built once
//! by [`NetworkBuilder`] (which performs all input validation) and never
//! mutated afterwards — the simulator and optimizer only ever borrow it.

pub mod error;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetError, NetResult};
pub use network::{Network, NetworkBuilder, Street, Vehicle};
