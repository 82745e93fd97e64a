//! Street network representation and builder.
//!
//! # Data layout
//!
//! Street and vehicle ids are their input positions, so both collections are
//! plain `Vec`s indexed directly.  The per-intersection street lists use
//! **Compressed Sparse Row (CSR)** format: given an `IntersectionId i`, its
//! incoming streets occupy the slice
//!
//! ```text
//! in_streets[ in_start[i] .. in_start[i+1] ]
//! ```
//!
//! (and symmetrically for outgoing streets).  Within one intersection the
//! street ids are in ascending order, so every iteration over a network is
//! deterministic.  A street's "used" flag — whether any vehicle travels it —
//! is a dense boolean array computed once at build time.

use rustc_hash::FxHashMap;

use gw_core::{IntersectionId, Score, StreetId, VehicleId};

use crate::error::{NetError, NetResult};

// ── Street / Vehicle ──────────────────────────────────────────────────────────

/// A directed street between two intersections.
#[derive(Clone, Debug)]
pub struct Street {
    /// Intersection the street starts at.
    pub from: IntersectionId,
    /// Intersection the street ends at (where its semaphore stands).
    pub to: IntersectionId,
    /// Traversal time in ticks.  Always ≥ 1.
    pub travel: u64,
    /// Unique display name; solution files cross-reference streets by it.
    pub name: String,
}

/// A vehicle and the ordered streets it drives.
///
/// The path starts at the end of its first street (vehicles spawn at that
/// street's semaphore) and finishes at the end of its last street.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Streets in travel order.  At least 2; no street appears twice;
    /// consecutive streets share an intersection.
    pub path: Vec<StreetId>,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// The immutable problem instance: constants, streets, vehicles, and derived
/// per-intersection adjacency.
///
/// Do not construct directly; use [`NetworkBuilder`], which validates the
/// input.  All lookups are read-only — nothing mutates a built network.
#[derive(Debug)]
pub struct Network {
    horizon:            u64,
    bonus:              Score,
    intersection_count: usize,
    streets:            Vec<Street>,
    vehicles:           Vec<Vehicle>,
    name_index:         FxHashMap<String, StreetId>,

    // CSR adjacency: streets arriving at / leaving each intersection.
    in_start:    Vec<u32>,
    in_streets:  Vec<StreetId>,
    out_start:   Vec<u32>,
    out_streets: Vec<StreetId>,

    /// `used[s]` is true when at least one vehicle path contains street `s`.
    used: Vec<bool>,
}

impl Network {
    // ── Instance constants ────────────────────────────────────────────────

    /// Total number of simulated ticks (exclusive upper bound of time).
    #[inline]
    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// Points awarded for every vehicle that completes its path in time.
    #[inline]
    pub fn bonus(&self) -> Score {
        self.bonus
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.intersection_count
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn street(&self, id: StreetId) -> &Street {
        &self.streets[id.index()]
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Resolve a street by its display name (solution-file cross-references).
    pub fn street_by_name(&self, name: &str) -> Option<StreetId> {
        self.name_index.get(name).copied()
    }

    /// Streets ending at `intersection`, ascending by id.
    ///
    /// This is a contiguous CSR slice — no heap allocation.
    #[inline]
    pub fn incoming(&self, intersection: IntersectionId) -> &[StreetId] {
        let start = self.in_start[intersection.index()] as usize;
        let end   = self.in_start[intersection.index() + 1] as usize;
        &self.in_streets[start..end]
    }

    /// Streets starting at `intersection`, ascending by id.
    #[inline]
    pub fn outgoing(&self, intersection: IntersectionId) -> &[StreetId] {
        let start = self.out_start[intersection.index()] as usize;
        let end   = self.out_start[intersection.index() + 1] as usize;
        &self.out_streets[start..end]
    }

    /// Whether any vehicle path contains `street`.  Precomputed at build;
    /// the trivial schedule builder skips unused streets entirely.
    #[inline]
    pub fn is_used(&self, street: StreetId) -> bool {
        self.used[street.index()]
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// Streets and vehicles may be added in any order; ids are assigned
/// sequentially from 0.  All input validation happens in `build()`:
/// street endpoints in range, traversal times ≥ 1, unique street names,
/// vehicle paths of ≥ 2 connected, non-repeating streets.
pub struct NetworkBuilder {
    horizon:            u64,
    bonus:              Score,
    intersection_count: usize,
    streets:            Vec<Street>,
    vehicles:           Vec<Vehicle>,
    name_index:         FxHashMap<String, StreetId>,
    duplicate_name:     Option<String>,
}

impl NetworkBuilder {
    pub fn new(horizon: u64, bonus: Score, intersections: usize) -> Self {
        Self::with_capacity(horizon, bonus, intersections, 0, 0)
    }

    /// Pre-allocate for the expected number of streets and vehicles — the
    /// input header declares both counts up front.
    pub fn with_capacity(
        horizon: u64,
        bonus: Score,
        intersections: usize,
        streets: usize,
        vehicles: usize,
    ) -> Self {
        Self {
            horizon,
            bonus,
            intersection_count: intersections,
            streets:            Vec::with_capacity(streets),
            vehicles:           Vec::with_capacity(vehicles),
            name_index:         FxHashMap::with_capacity_and_hasher(streets, Default::default()),
            duplicate_name:     None,
        }
    }

    /// Add a street and return its `StreetId` (sequential from 0).
    pub fn add_street(
        &mut self,
        name: impl Into<String>,
        from: IntersectionId,
        to: IntersectionId,
        travel: u64,
    ) -> StreetId {
        let name = name.into();
        let id = StreetId(self.streets.len() as u32);
        if self.name_index.insert(name.clone(), id).is_some() && self.duplicate_name.is_none() {
            self.duplicate_name = Some(name.clone());
        }
        self.streets.push(Street { from, to, travel, name });
        id
    }

    /// Add a vehicle and return its `VehicleId` (sequential from 0).
    pub fn add_vehicle(&mut self, path: Vec<StreetId>) -> VehicleId {
        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(Vehicle { path });
        id
    }

    /// Resolve a street added earlier by name (used while parsing vehicle
    /// paths, which reference streets by name).
    pub fn street_id(&self, name: &str) -> Option<StreetId> {
        self.name_index.get(name).copied()
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Validate everything added so far and produce a [`Network`].
    ///
    /// Time complexity: O(S + V·P) where P is the mean path length.
    pub fn build(self) -> NetResult<Network> {
        let street_count = self.streets.len();
        let n = self.intersection_count;

        if let Some(name) = self.duplicate_name {
            return Err(NetError::DuplicateStreetName(name));
        }

        for street in &self.streets {
            for endpoint in [street.from, street.to] {
                if endpoint.index() >= n {
                    return Err(NetError::EndpointOutOfRange {
                        name:         street.name.clone(),
                        intersection: endpoint,
                        count:        n,
                    });
                }
            }
            if street.travel == 0 {
                return Err(NetError::ZeroLengthStreet { name: street.name.clone() });
            }
        }

        // Validate paths and mark used streets in one pass.  `last_seen`
        // stamps each street with the last vehicle that drove it, so repeat
        // detection needs no per-vehicle allocation.
        let mut used = vec![false; street_count];
        let mut last_seen = vec![u32::MAX; street_count];
        for (vi, vehicle) in self.vehicles.iter().enumerate() {
            let vid = VehicleId(vi as u32);
            if vehicle.path.len() < 2 {
                return Err(NetError::PathTooShort { vehicle: vid, len: vehicle.path.len() });
            }
            for (pos, &sid) in vehicle.path.iter().enumerate() {
                if sid.index() >= street_count {
                    return Err(NetError::StreetOutOfRange { vehicle: vid, street: sid });
                }
                if last_seen[sid.index()] == vi as u32 {
                    return Err(NetError::RepeatedStreet {
                        vehicle: vid,
                        street:  self.streets[sid.index()].name.clone(),
                    });
                }
                last_seen[sid.index()] = vi as u32;
                used[sid.index()] = true;

                if pos + 1 < vehicle.path.len() {
                    let next = vehicle.path[pos + 1];
                    if next.index() >= street_count {
                        return Err(NetError::StreetOutOfRange { vehicle: vid, street: next });
                    }
                    if self.streets[sid.index()].to != self.streets[next.index()].from {
                        return Err(NetError::DisconnectedPath {
                            vehicle: vid,
                            street:  self.streets[sid.index()].name.clone(),
                            next:    self.streets[next.index()].name.clone(),
                        });
                    }
                }
            }
        }

        // Build CSR row pointers by counting, prefix-summing, then filling
        // with a cursor per intersection.  Street ids are their input
        // positions, so the fill pass visits them in ascending order and each
        // CSR slice comes out sorted.
        let mut in_start = vec![0u32; n + 1];
        let mut out_start = vec![0u32; n + 1];
        for street in &self.streets {
            in_start[street.to.index() + 1] += 1;
            out_start[street.from.index() + 1] += 1;
        }
        for i in 1..=n {
            in_start[i] += in_start[i - 1];
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(in_start[n] as usize, street_count);
        debug_assert_eq!(out_start[n] as usize, street_count);

        let mut in_cursor: Vec<u32> = in_start[..n].to_vec();
        let mut out_cursor: Vec<u32> = out_start[..n].to_vec();
        let mut in_streets = vec![StreetId(0); street_count];
        let mut out_streets = vec![StreetId(0); street_count];
        for (si, street) in self.streets.iter().enumerate() {
            let sid = StreetId(si as u32);
            in_streets[in_cursor[street.to.index()] as usize] = sid;
            in_cursor[street.to.index()] += 1;
            out_streets[out_cursor[street.from.index()] as usize] = sid;
            out_cursor[street.from.index()] += 1;
        }

        Ok(Network {
            horizon: self.horizon,
            bonus: self.bonus,
            intersection_count: n,
            streets: self.streets,
            vehicles: self.vehicles,
            name_index: self.name_index,
            in_start,
            in_streets,
            out_start,
            out_streets,
            used,
        })
    }
}
