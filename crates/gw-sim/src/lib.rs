//! `gw-sim` — the discrete-time traffic simulator.
//!
//! # Tick loop
//!
//! ```text
//! for now in 0..horizon:
//!   ① Arrivals  — vehicles whose street traversal ends this tick join that
//!                 street's FIFO queue, in registration order.
//!   ② Stats     — record peak queue depth per street (ascending street id).
//!   ③ Release   — each scheduled intersection (ascending id) looks up its
//!                 green street and releases at most one queued vehicle:
//!                   second-to-last street → score the completion
//!                   otherwise             → register a future arrival
//! ```
//!
//! A run is a pure function of (network, solution): queues and statistics are
//! built fresh inside [`simulate`] and dropped when it returns, and every
//! collection is iterated in a fixed order, so repeated calls return identical
//! reports.  The optimizer leans on this — it compares scores across thousands
//! of calls to decide which mutations to keep.

pub mod arrivals;
pub mod error;
pub mod queues;
pub mod sim;
pub mod stats;


pub use arrivals::{Arrival, ArrivalQueue};
pub use error::{SimError, SimResult};
pub use queues::StreetQueues;
pub use sim::{SimReport, simulate};
pub use stats::JamStats;
