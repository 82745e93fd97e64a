//! Plan import and export.
//!
//! # Plan format
//!
//! ```text
//! 2                    ← number of scheduled intersections
//! 0                    ← intersection id
//! 1                    ← number of slots in its cycle
//! rue-d-amsterdam 1    ← slot lines: street name, green duration
//! 1
//! 2
//! rue-d-athenes 2
//! rue-de-moscou 1
//! ```
//!
//! Import resolves street names against the [`Network`], rejects a second
//! block for an intersection already seen, and runs [`Solution::validate`]
//! before returning, so an imported plan is always simulatable.  Export
//! writes blocks in ascending intersection id order; re-importing the
//! written file yields an identical plan.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use gw_core::IntersectionId;
use gw_net::Network;
use gw_plan::{GreenSlot, Schedule, Solution};

use crate::cursor::{field, LineCursor};
use crate::error::IoResult;

/// Load a plan file and validate it against `network`.
pub fn load_solution(path: &Path, network: &Network) -> IoResult<Solution> {
    load_solution_reader(BufReader::new(File::open(path)?), network)
}

/// Like [`load_solution`] but accepts any `BufRead` source.
pub fn load_solution_reader<R: BufRead>(reader: R, network: &Network) -> IoResult<Solution> {
    let mut cursor = LineCursor::new(reader);

    let count_line = cursor.next_line()?;
    let count: usize = field(
        count_line.split_whitespace().next(),
        "scheduled intersection count",
        cursor.line(),
    )?;

    let mut solution = Solution::new(network.intersection_count());

    for _ in 0..count {
        let id_line = cursor.next_line()?;
        let id: u32 = field(
            id_line.split_whitespace().next(),
            "intersection id",
            cursor.line(),
        )?;
        let intersection = IntersectionId(id);
        if solution.get(intersection).is_some() {
            return Err(cursor.error(format!("second schedule block for intersection {id}")));
        }

        let size_line = cursor.next_line()?;
        let size: usize = field(
            size_line.split_whitespace().next(),
            "slot count",
            cursor.line(),
        )?;

        let mut schedule = Schedule::new(intersection);
        for _ in 0..size {
            let line = cursor.next_line()?;
            let mut tokens = line.split_whitespace();
            let name = tokens
                .next()
                .ok_or_else(|| cursor.error("missing street name"))?;
            let street = network
                .street_by_name(name)
                .ok_or_else(|| cursor.error(format!("unknown street {name:?}")))?;
            let green: u64 = field(tokens.next(), "green duration", cursor.line())?;
            schedule.slots.push(GreenSlot { street, green });
        }
        solution.insert(schedule)?;
    }

    solution.validate(network)?;
    Ok(solution)
}

/// Write a plan file (blocks in ascending intersection id order).
pub fn write_solution(path: &Path, solution: &Solution, network: &Network) -> IoResult<()> {
    write_solution_to(BufWriter::new(File::create(path)?), solution, network)
}

/// Like [`write_solution`] but accepts any `Write` sink.
pub fn write_solution_to<W: Write>(
    mut writer: W,
    solution: &Solution,
    network: &Network,
) -> IoResult<()> {
    writeln!(writer, "{}", solution.schedule_count())?;
    for (intersection, schedule) in solution.iter() {
        writeln!(writer, "{}", intersection.index())?;
        writeln!(writer, "{}", schedule.slots.len())?;
        for slot in &schedule.slots {
            writeln!(writer, "{} {}", network.street(slot.street).name, slot.green)?;
        }
    }
    writer.flush()?;
    Ok(())
}
