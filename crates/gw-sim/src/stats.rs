//! Jam statistics: per-street peak queue depth over one simulation run.

use gw_core::StreetId;

/// Peak queue depth observed per street across a single run.
///
/// Rebuilt fresh by every [`simulate`](crate::simulate) call; no state
/// survives between runs.  The jam-targeted optimizer ranks streets by these
/// peaks to decide where extra green time is most likely to pay off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JamStats {
    /// `peaks[s]` = deepest queue seen at street `s`; 0 if it never queued.
    peaks: Vec<u32>,
}

impl JamStats {
    pub fn new(street_count: usize) -> Self {
        Self { peaks: vec![0; street_count] }
    }

    /// Record a queue depth observation for `street`.
    #[inline]
    pub fn observe(&mut self, street: StreetId, depth: usize) {
        let peak = &mut self.peaks[street.index()];
        *peak = (*peak).max(depth as u32);
    }

    /// Peak depth observed for `street` (0 if its queue stayed empty).
    #[inline]
    pub fn peak(&self, street: StreetId) -> u32 {
        self.peaks[street.index()]
    }

    pub fn street_count(&self) -> usize {
        self.peaks.len()
    }

    /// Streets that jammed at least once, deepest first.  Ties break toward
    /// the lower street id so the ranking is deterministic.
    pub fn ranked(&self) -> Vec<StreetId> {
        let mut jammed: Vec<StreetId> = (0..self.peaks.len())
            .filter(|&i| self.peaks[i] > 0)
            .map(|i| StreetId(i as u32))
            .collect();
        jammed.sort_by(|&a, &b| {
            self.peaks[b.index()]
                .cmp(&self.peaks[a.index()])
                .then(a.index().cmp(&b.index()))
        });
        jammed
    }
}
