//! A whole-network assignment of schedules to intersections.

use gw_core::IntersectionId;
use gw_net::Network;

use crate::error::{PlanError, PlanResult};
use crate::schedule::{GreenSlot, Schedule};

/// Maps every intersection to its [`Schedule`], or to none.
///
/// Stored densely, indexed by intersection id, so iteration order is always
/// ascending id — simulation and export depend on that determinism.
/// Intersections that no used street enters are legitimately schedule-less:
/// their semaphores stay red forever and no vehicle ever waits there.
#[derive(Clone, Debug)]
pub struct Solution {
    schedules: Vec<Option<Schedule>>,
}

impl Solution {
    /// A solution with no schedules, sized for `intersections`.
    pub fn new(intersections: usize) -> Self {
        Self { schedules: vec![None; intersections] }
    }

    /// The trivial starting point: every used incoming street of every
    /// intersection gets 1 tick of green, in ascending street-id order.
    /// Streets no vehicle drives get no green time at all.
    ///
    /// The result always passes [`validate`](Self::validate).
    pub fn trivial(network: &Network) -> Self {
        let mut schedules = vec![None; network.intersection_count()];
        for (i, entry) in schedules.iter_mut().enumerate() {
            let intersection = IntersectionId(i as u32);
            let slots: Vec<GreenSlot> = network
                .incoming(intersection)
                .iter()
                .copied()
                .filter(|&street| network.is_used(street))
                .map(|street| GreenSlot { street, green: 1 })
                .collect();
            if !slots.is_empty() {
                *entry = Some(Schedule { intersection, slots });
            }
        }
        Self { schedules }
    }

    // ── Access ────────────────────────────────────────────────────────────

    /// Number of intersections this solution is sized for (with or without
    /// a schedule).
    pub fn intersection_count(&self) -> usize {
        self.schedules.len()
    }

    /// Number of intersections that have a schedule.  O(intersections).
    pub fn schedule_count(&self) -> usize {
        self.schedules.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.iter().all(|s| s.is_none())
    }

    #[inline]
    pub fn get(&self, intersection: IntersectionId) -> Option<&Schedule> {
        self.schedules.get(intersection.index()).and_then(|s| s.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, intersection: IntersectionId) -> Option<&mut Schedule> {
        self.schedules.get_mut(intersection.index()).and_then(|s| s.as_mut())
    }

    /// Store `schedule` under its own intersection id, replacing any previous
    /// schedule there.
    pub fn insert(&mut self, schedule: Schedule) -> PlanResult<()> {
        let idx = schedule.intersection.index();
        if idx >= self.schedules.len() {
            return Err(PlanError::UnknownIntersection(schedule.intersection));
        }
        self.schedules[idx] = Some(schedule);
        Ok(())
    }

    /// Scheduled intersections in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (IntersectionId, &Schedule)> {
        self.schedules
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|sched| (IntersectionId(i as u32), sched)))
    }

    /// The ids of all scheduled intersections, ascending.  The optimizer
    /// collects this once per run — strategies change durations and slot
    /// order, never which intersections are scheduled.
    pub fn scheduled_ids(&self) -> Vec<IntersectionId> {
        self.iter().map(|(intersection, _)| intersection).collect()
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check every schedule invariant against `network`.
    ///
    /// Violations mean the solution must not be simulated; the first one
    /// found is returned.
    pub fn validate(&self, network: &Network) -> PlanResult<()> {
        for (intersection, sched) in self.iter() {
            if sched.intersection != intersection {
                return Err(PlanError::IntersectionMismatch {
                    expected: intersection,
                    found:    sched.intersection,
                });
            }
            if sched.slots.is_empty() {
                return Err(PlanError::EmptySchedule(intersection));
            }
            let mut total = 0u64;
            for (i, slot) in sched.slots.iter().enumerate() {
                let ends_here = slot.street.index() < network.street_count()
                    && network.street(slot.street).to == intersection;
                if !ends_here {
                    return Err(PlanError::StreetNotIncoming {
                        intersection,
                        street: slot.street,
                    });
                }
                if sched.slots[..i].iter().any(|prev| prev.street == slot.street) {
                    return Err(PlanError::DuplicateStreet { intersection, street: slot.street });
                }
                if slot.green == 0 {
                    return Err(PlanError::ZeroGreen { intersection, street: slot.street });
                }
                total += slot.green;
            }
            if total > network.horizon() {
                return Err(PlanError::OverHorizon {
                    intersection,
                    duration: total,
                    horizon:  network.horizon(),
                });
            }
        }
        Ok(())
    }
}
