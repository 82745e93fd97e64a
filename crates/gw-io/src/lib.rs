//! # gw-io
//!
//! File formats for the greenwave toolkit.
//!
//! | Function | Format |
//! |----------|--------|
//! | [`load_problem`] | problem input: header, streets, vehicle paths |
//! | [`load_solution`] / [`write_solution`] | per-intersection schedule blocks |
//! | [`write_jam_report`] | CSV of per-street peak queue depths |
//!
//! The readers validate as they parse: every lexical failure names the
//! 1-based line it came from, and both loaders run full model validation
//! before returning, so a [`gw_net::Network`] or [`gw_plan::Solution`]
//! obtained here is safe to hand to the simulator.  Each loader has a
//! `*_reader` twin that accepts any in-memory source.

pub mod error;
pub mod problem;
pub mod report;
pub mod solution;

mod cursor;


pub use error::{IoError, IoResult};
pub use problem::{load_problem, load_problem_reader};
pub use report::write_jam_report;
pub use solution::{load_solution, load_solution_reader, write_solution, write_solution_to};
