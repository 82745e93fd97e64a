//! Problem input parser.
//!
//! # Input format
//!
//! Plain text, whitespace-separated.  The header declares every count, so
//! the parser reads exactly `1 + S + V` lines and ignores anything after.
//!
//! ```text
//! 6 4 5 2 1000                    ← horizon, intersections, streets, vehicles, bonus
//! 2 0 rue-de-londres 1            ← S street lines: from, to, name, travel time
//! 0 1 rue-d-amsterdam 1
//! 3 1 rue-d-athenes 1
//! 2 3 rue-de-rome 2
//! 1 2 rue-de-moscou 3
//! 4 rue-de-londres rue-d-amsterdam rue-de-moscou rue-de-rome
//! 3 rue-d-athenes rue-de-moscou rue-de-londres
//! ```
//!
//! Vehicle lines give the path length followed by that many street names,
//! resolved against the streets declared above.  Structural validation
//! (endpoint ranges, path connectivity, repeated streets) happens in
//! [`NetworkBuilder::build`]; this module only reports lexical errors,
//! each pinned to its 1-based line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use gw_core::IntersectionId;
use gw_net::{Network, NetworkBuilder};

use crate::cursor::{field, LineCursor};
use crate::error::IoResult;

/// Load a problem file into a validated [`Network`].
pub fn load_problem(path: &Path) -> IoResult<Network> {
    load_problem_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_problem`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from pipes.
pub fn load_problem_reader<R: BufRead>(reader: R) -> IoResult<Network> {
    let mut cursor = LineCursor::new(reader);

    // ── Header ────────────────────────────────────────────────────────────
    let header = cursor.next_line()?;
    let mut tokens = header.split_whitespace();
    let horizon: u64 = field(tokens.next(), "horizon", cursor.line())?;
    let intersections: usize = field(tokens.next(), "intersection count", cursor.line())?;
    let streets: usize = field(tokens.next(), "street count", cursor.line())?;
    let vehicles: usize = field(tokens.next(), "vehicle count", cursor.line())?;
    let bonus: u64 = field(tokens.next(), "completion bonus", cursor.line())?;

    let mut builder =
        NetworkBuilder::with_capacity(horizon, bonus, intersections, streets, vehicles);

    // ── Streets ───────────────────────────────────────────────────────────
    for _ in 0..streets {
        let line = cursor.next_line()?;
        let mut tokens = line.split_whitespace();
        let from: u32 = field(tokens.next(), "origin intersection", cursor.line())?;
        let to: u32 = field(tokens.next(), "destination intersection", cursor.line())?;
        let name = tokens
            .next()
            .ok_or_else(|| cursor.error("missing street name"))?;
        let travel: u64 = field(tokens.next(), "travel time", cursor.line())?;
        builder.add_street(name, IntersectionId(from), IntersectionId(to), travel);
    }

    // ── Vehicle paths ─────────────────────────────────────────────────────
    for _ in 0..vehicles {
        let line = cursor.next_line()?;
        let mut tokens = line.split_whitespace();
        let len: usize = field(tokens.next(), "path length", cursor.line())?;

        let mut path = Vec::with_capacity(len);
        for _ in 0..len {
            let name = tokens
                .next()
                .ok_or_else(|| cursor.error("missing street name in path"))?;
            let street = builder
                .street_id(name)
                .ok_or_else(|| cursor.error(format!("unknown street {name:?}")))?;
            path.push(street);
        }
        builder.add_vehicle(path);
    }

    Ok(builder.build()?)
}
