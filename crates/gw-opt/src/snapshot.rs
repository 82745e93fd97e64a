//! Exact undo for rejected search moves.

use gw_core::IntersectionId;
use gw_plan::{Schedule, Solution};

/// A deep copy of the schedules one search move is about to touch.
///
/// Capture before mutating, then either drop the snapshot (move kept) or
/// [`restore`](Self::restore) it (move rejected).  Restoration is exact:
/// green durations and slot order come back precisely as captured, which the
/// keep-or-revert discipline depends on.
///
/// Only the named intersections are saved, so a move touching two schedules
/// out of thousands copies two schedules, not the whole solution.
pub struct Snapshot {
    saved: Vec<(IntersectionId, Schedule)>,
}

impl Snapshot {
    /// Deep-copy the schedules of `touched` intersections.  Intersections
    /// without a schedule are skipped (the strategies never add or remove
    /// schedules, only rewrite existing ones).
    pub fn capture(solution: &Solution, touched: &[IntersectionId]) -> Self {
        let saved = touched
            .iter()
            .filter_map(|&id| solution.get(id).map(|schedule| (id, schedule.clone())))
            .collect();
        Self { saved }
    }

    /// Number of schedules captured.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Write every captured schedule back, consuming the snapshot.
    pub fn restore(self, solution: &mut Solution) {
        for (id, schedule) in self.saved {
            debug_assert!(solution.get(id).is_some(), "snapshot target {id} vanished");
            if let Some(live) = solution.get_mut(id) {
                *live = schedule;
            }
        }
    }
}
