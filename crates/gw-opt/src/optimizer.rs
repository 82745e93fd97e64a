//! The `Optimizer` and its three search strategies.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use gw_core::{IntersectionId, Score, SearchRng};
use gw_net::Network;
use gw_plan::Solution;
use gw_sim::{SimReport, simulate};

use crate::budget::Deadline;
use crate::error::{OptError, OptResult};
use crate::snapshot::Snapshot;

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Which search strategy [`Optimizer::run`] dispatches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    HillClimb,
    JamTargeted,
    RandomRestart,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::HillClimb,
        Strategy::JamTargeted,
        Strategy::RandomRestart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::HillClimb => "hill-climb",
            Strategy::JamTargeted => "jam-targeted",
            Strategy::RandomRestart => "random-restart",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hill-climb" => Ok(Strategy::HillClimb),
            "jam-targeted" => Ok(Strategy::JamTargeted),
            "random-restart" => Ok(Strategy::RandomRestart),
            other => Err(OptError::UnknownStrategy(other.to_string())),
        }
    }
}

// ── Optimizer ─────────────────────────────────────────────────────────────────

/// Local-search driver owning the RNG for one optimization run.
///
/// All strategies mutate the solution in place and return the best score
/// reached.  On return the solution always corresponds to that score — a
/// rejected move is never left applied, and an expiring deadline only stops
/// the search between moves.
pub struct Optimizer<'n> {
    network: &'n Network,
    rng:     SearchRng,
}

impl<'n> Optimizer<'n> {
    pub fn new(network: &'n Network, seed: u64) -> Self {
        Self::with_rng(network, SearchRng::new(seed))
    }

    /// Use a pre-built RNG, e.g. one derived per instance for parallel runs.
    pub fn with_rng(network: &'n Network, rng: SearchRng) -> Self {
        Self { network, rng }
    }

    /// Run `strategy` against `solution` under `budget`.
    pub fn run(
        &mut self,
        strategy: Strategy,
        solution: &mut Solution,
        budget: Duration,
    ) -> OptResult<Score> {
        match strategy {
            Strategy::HillClimb => self.hill_climb(solution, budget),
            Strategy::JamTargeted => self.jam_targeted(solution, budget),
            Strategy::RandomRestart => self.random_restart(solution, budget),
        }
    }

    // ── Strategies ────────────────────────────────────────────────────────

    /// Greedy slot widening: sweep every schedule slot, adding green ticks
    /// while each addition strictly improves the score.  Terminates when a
    /// full sweep commits nothing, or when the budget expires.
    pub fn hill_climb(&mut self, solution: &mut Solution, budget: Duration) -> OptResult<Score> {
        let deadline = Deadline::after(budget);
        let best = self.hill_climb_until(solution, &deadline)?;
        log::info!("hill-climb done: score {}", best);
        Ok(best)
    }

    /// Jam-targeted widening with an adaptive batch size.
    ///
    /// Each round ranks streets by the peak queue depth of the last accepted
    /// run and widens the slot serving each of the `k` worst.  A rejected
    /// round shrinks `k`; once `k` bottoms out the strategy resets it and
    /// runs an escape move (a greedy sub-pass or a slot shuffle) to leave
    /// the local optimum the jam ranking steered into.
    pub fn jam_targeted(&mut self, solution: &mut Solution, budget: Duration) -> OptResult<Score> {
        let deadline = Deadline::after(budget);
        let horizon = self.network.horizon();
        let init_k = self.network.street_count() / 200 + 1;
        let mut k = init_k;

        let report = simulate(self.network, solution)?;
        let initial = report.score;
        let mut best = initial;
        let mut jams = report.jams;

        while !deadline.expired() {
            if k <= 2 {
                k = init_k;
                if self.rng.gen_bool(0.7) {
                    let sub = deadline.sub_budget(budget / 20);
                    self.hill_climb_until(solution, &sub)?;
                    let refreshed = simulate(self.network, solution)?;
                    best = refreshed.score;
                    jams = refreshed.jams;
                } else if let Some(kept) = self.shuffle_round(solution, best, k)? {
                    best = kept.score;
                    jams = kept.jams;
                }
            }

            // Widen the slot serving each of the k worst-jammed streets.
            // Feasibility is checked against the live schedule as increments
            // land, so two hot streets at one intersection cannot push its
            // duration past the horizon together.
            let targets = jams.ranked();
            let mut touched: Vec<IntersectionId> = targets
                .iter()
                .take(k)
                .map(|&street| self.network.street(street).to)
                .collect();
            touched.sort_unstable();
            touched.dedup();

            let network = self.network;
            let mut bumped = 0usize;
            let outcome = self.try_move(solution, &touched, false, best, |sol, _| {
                for &street in targets.iter().take(k) {
                    let Some(schedule) = sol.get_mut(network.street(street).to) else {
                        continue;
                    };
                    if schedule.duration() + 1 > horizon {
                        continue;
                    }
                    let Some(slot) = schedule.slot_serving(street) else { continue };
                    schedule.slots[slot].green += 1;
                    bumped += 1;
                }
            })?;
            match outcome {
                Some(kept) => {
                    log::debug!("jam round kept: {} slots widened, score {}", bumped, kept.score);
                    best = kept.score;
                    jams = kept.jams;
                }
                None => k = k / 2 + 1,
            }
        }

        log::info!("jam-targeted done: {} -> {}", initial, best);
        Ok(best)
    }

    /// Randomized restarts: greedy bursts on a slice of the budget, mixed
    /// with rounds that shuffle the slot order of a few random schedules.
    /// Shuffles keep plateau results, which is what lets the search walk off
    /// ridges the strict hill-climb cannot leave.
    pub fn random_restart(&mut self, solution: &mut Solution, budget: Duration) -> OptResult<Score> {
        let deadline = Deadline::after(budget);
        let k_bound = self.network.street_count() / 200 + 1;
        let initial = simulate(self.network, solution)?.score;
        let mut best = initial;

        while !deadline.expired() {
            if self.rng.gen_bool(0.7) {
                let sub = deadline.sub_budget(budget / 50 + Duration::from_secs(1));
                best = self.hill_climb_until(solution, &sub)?;
            } else if let Some(kept) = self.shuffle_round(solution, best, k_bound)? {
                best = kept.score;
            }
        }

        log::info!("random-restart done: {} -> {}", initial, best);
        Ok(best)
    }

    // ── Shared move machinery ─────────────────────────────────────────────

    /// Core greedy loop shared by the public strategies: visit schedules in
    /// ascending intersection id, widening each slot while every extra tick
    /// strictly improves the score.
    fn hill_climb_until(
        &mut self,
        solution: &mut Solution,
        deadline: &Deadline,
    ) -> OptResult<Score> {
        let horizon = self.network.horizon();
        let mut best = simulate(self.network, solution)?.score;
        let ids = solution.scheduled_ids();

        let mut improved = true;
        'sweeps: while improved {
            improved = false;
            for &id in &ids {
                let slot_count = match solution.get(id) {
                    Some(schedule) => schedule.slots.len(),
                    None => continue,
                };
                for slot in 0..slot_count {
                    // Climb this slot while each extra tick pays.
                    loop {
                        if deadline.expired() {
                            break 'sweeps;
                        }
                        let at_cap = match solution.get(id) {
                            Some(schedule) => schedule.duration() + 1 > horizon,
                            None => true,
                        };
                        if at_cap {
                            break;
                        }
                        let outcome = self.try_move(solution, &[id], false, best, |sol, _| {
                            if let Some(schedule) = sol.get_mut(id) {
                                schedule.slots[slot].green += 1;
                            }
                        })?;
                        match outcome {
                            Some(kept) => {
                                log::debug!("widened slot {} at {}: score {}", slot, id, kept.score);
                                best = kept.score;
                                improved = true;
                            }
                            None => break,
                        }
                    }
                }
            }
        }
        Ok(best)
    }

    /// Shuffle the slot order of up to `k_bound` random schedules, keeping
    /// the result unless it scored strictly worse.  Reordering moves green
    /// windows around the cycle without changing durations or street sets,
    /// so the move can never invalidate a schedule.
    fn shuffle_round(
        &mut self,
        solution: &mut Solution,
        baseline: Score,
        k_bound: usize,
    ) -> OptResult<Option<SimReport>> {
        let ids = solution.scheduled_ids();
        if ids.is_empty() || k_bound == 0 {
            return Ok(None);
        }
        // A zero-sized pick is a legitimate no-op round.
        let count = self.rng.gen_range(0..k_bound);
        let picked = self.rng.choose_multiple(&ids, count);
        self.try_move(solution, &picked, true, baseline, |sol, rng| {
            for &id in &picked {
                if let Some(schedule) = sol.get_mut(id) {
                    rng.shuffle(&mut schedule.slots);
                }
            }
        })
    }

    /// Snapshot `touched`, apply `mutate`, re-simulate, and keep the result
    /// only if the score clears `baseline` (strictly, or non-strictly with
    /// `keep_plateau`).  On rejection every touched schedule is restored
    /// exactly and `Ok(None)` reports the move as rejected.
    ///
    /// This is the one place search moves are committed; every strategy
    /// funnels its mutations through here.
    fn try_move(
        &mut self,
        solution: &mut Solution,
        touched: &[IntersectionId],
        keep_plateau: bool,
        baseline: Score,
        mutate: impl FnOnce(&mut Solution, &mut SearchRng),
    ) -> OptResult<Option<SimReport>> {
        let snapshot = Snapshot::capture(solution, touched);
        mutate(solution, &mut self.rng);
        let report = simulate(self.network, solution)?;
        let keep = if keep_plateau {
            report.score >= baseline
        } else {
            report.score > baseline
        };
        if keep {
            Ok(Some(report))
        } else {
            snapshot.restore(solution);
            Ok(None)
        }
    }
}
