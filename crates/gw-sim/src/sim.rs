//! The `simulate` entry point and its tick loop.

use gw_core::{Score, StreetId, Tick, VehicleId};
use gw_net::Network;
use gw_plan::Solution;

use crate::arrivals::{Arrival, ArrivalQueue};
use crate::error::{SimError, SimResult};
use crate::queues::StreetQueues;
use crate::stats::JamStats;

// ── SimReport ─────────────────────────────────────────────────────────────────

/// What one simulation run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    /// Total points: the per-completion bonus plus one point per tick of
    /// early arrival, summed over all completed vehicles.
    pub score: Score,
    /// Vehicles that finished their path within the horizon.
    pub completed: u32,
    /// Per-street peak queue depths.
    pub jams: JamStats,
}

// ── simulate ──────────────────────────────────────────────────────────────────

/// Run `solution` against `network` over the full horizon.
///
/// Validates the solution first; a solution that fails validation never
/// reaches the tick loop.  Each call builds fresh queues and statistics and
/// drops them on return, so no state leaks between runs.
pub fn simulate(network: &Network, solution: &Solution) -> SimResult<SimReport> {
    solution.validate(network)?;

    let horizon = network.horizon();
    let mut score: Score = 0;
    let mut completed: u32 = 0;
    let mut arrivals = ArrivalQueue::new();
    let mut queues = StreetQueues::new(network.street_count(), network.vehicle_count());
    let mut jams = JamStats::new(network.street_count());

    // Every vehicle starts the run already waiting at the end of its first
    // street, seeded in vehicle-id order.
    for vi in 0..network.vehicle_count() {
        arrivals.push(Tick::ZERO, Arrival { vehicle: VehicleId(vi as u32), leg: 0 });
    }

    for now in (0..horizon).map(Tick) {
        // ── Phase 1: enqueue this tick's arrivals ─────────────────────────
        //
        // Registration order carries through to FIFO position: vehicles
        // reaching one street on the same tick queue in the order their
        // arrivals were scheduled.
        if let Some(batch) = arrivals.drain_tick(now) {
            for arrival in batch {
                let street = network.vehicle(arrival.vehicle).path[arrival.leg];
                queues.push(street, arrival.vehicle)?;
            }
        }

        // ── Phase 2: record jam peaks ─────────────────────────────────────
        for si in 0..network.street_count() {
            let street = StreetId(si as u32);
            let depth = queues.depth(street);
            if depth > 0 {
                jams.observe(street, depth);
            }
        }

        // ── Phase 3: release one vehicle per green street ─────────────────
        //
        // Scheduled intersections in ascending id order.  At most one
        // vehicle crosses a semaphore per tick, however deep its queue.
        for (_, schedule) in solution.iter() {
            let green = schedule.green_at(now);
            let Some(vehicle) = queues.pop(green) else { continue };

            let path = &network.vehicle(vehicle).path;
            let Some(leg) = path.iter().position(|&s| s == green) else {
                return Err(SimError::OffPath { vehicle, street: green });
            };

            if leg + 2 == path.len() {
                // Final leg: the vehicle finishes at the end of its last
                // street without queueing again.  Finishing exactly on the
                // horizon still scores (earning no early bonus); the
                // mid-path registration below uses the strict bound.
                let finish = now + network.street(path[leg + 1]).travel;
                if finish.0 <= horizon {
                    score += network.bonus() + (horizon - finish.0);
                    completed += 1;
                }
            } else {
                let reach = now + network.street(path[leg + 1]).travel;
                if reach.0 < horizon {
                    arrivals.push(reach, Arrival { vehicle, leg: leg + 1 });
                }
                // An arrival at or past the horizon is dropped: the vehicle
                // can never clear another semaphore in time.
            }
        }
    }

    Ok(SimReport { score, completed, jams })
}
