//! Unit tests for schedules and solutions.

#[cfg(test)]
mod helpers {
    use gw_core::{IntersectionId, StreetId};
    use gw_net::{Network, NetworkBuilder};

    /// Loop of three streets (a: 0→1, b: 1→2, c: 2→0); one vehicle drives
    /// a→b, so street c is unused.  Horizon 6, bonus 1000.
    pub fn triangle() -> (Network, [StreetId; 3]) {
        let mut bld = NetworkBuilder::new(6, 1000, 3);
        let a = bld.add_street("a-st", IntersectionId(0), IntersectionId(1), 1);
        let b = bld.add_street("b-st", IntersectionId(1), IntersectionId(2), 1);
        let c = bld.add_street("c-st", IntersectionId(2), IntersectionId(0), 1);
        bld.add_vehicle(vec![a, b]);
        (bld.build().expect("valid triangle"), [a, b, c])
    }
}

#[cfg(test)]
mod schedule_ops {
    use gw_core::{IntersectionId, StreetId, Tick};

    use crate::{GreenSlot, Schedule};

    fn two_slot() -> Schedule {
        Schedule {
            intersection: IntersectionId(1),
            slots: vec![
                GreenSlot { street: StreetId(0), green: 2 },
                GreenSlot { street: StreetId(1), green: 1 },
            ],
        }
    }

    #[test]
    fn duration_sums_slots() {
        assert_eq!(two_slot().duration(), 3);
        assert_eq!(Schedule::new(IntersectionId(0)).duration(), 0);
    }

    #[test]
    fn green_at_cycles() {
        let sched = two_slot();
        // cycle of 3: [s0 s0 s1] repeating
        assert_eq!(sched.green_at(Tick(0)), StreetId(0));
        assert_eq!(sched.green_at(Tick(1)), StreetId(0));
        assert_eq!(sched.green_at(Tick(2)), StreetId(1));
        assert_eq!(sched.green_at(Tick(3)), StreetId(0));
        assert_eq!(sched.green_at(Tick(5)), StreetId(1));
        assert_eq!(sched.green_at(Tick(300)), StreetId(0));
    }

    #[test]
    fn green_at_is_total() {
        let sched = two_slot();
        let listed: Vec<StreetId> = sched.slots.iter().map(|s| s.street).collect();
        for t in 0..50 {
            let green = sched.green_at(Tick(t));
            assert!(listed.contains(&green), "tick {t} yielded unlisted street {green}");
        }
    }

    #[test]
    fn slot_serving() {
        let sched = two_slot();
        assert_eq!(sched.slot_serving(StreetId(1)), Some(1));
        assert_eq!(sched.slot_serving(StreetId(7)), None);
    }
}

#[cfg(test)]
mod solutions {
    use gw_core::IntersectionId;

    use super::helpers::triangle;
    use crate::{GreenSlot, PlanError, Schedule, Solution};

    #[test]
    fn trivial_covers_used_streets_only() {
        let (net, [a, b, _]) = triangle();
        let sol = Solution::trivial(&net);

        // street c is unused, so intersection 0 (where c ends) gets nothing
        assert!(sol.get(IntersectionId(0)).is_none());
        assert_eq!(sol.scheduled_ids(), vec![IntersectionId(1), IntersectionId(2)]);
        assert_eq!(sol.schedule_count(), 2);

        let at1 = sol.get(IntersectionId(1)).expect("a ends at 1");
        assert_eq!(at1.slots, vec![GreenSlot { street: a, green: 1 }]);
        let at2 = sol.get(IntersectionId(2)).expect("b ends at 2");
        assert_eq!(at2.slots, vec![GreenSlot { street: b, green: 1 }]);
    }

    #[test]
    fn trivial_validates() {
        let (net, _) = triangle();
        Solution::trivial(&net).validate(&net).expect("trivial must validate");
    }

    #[test]
    fn insert_rejects_unknown_intersection() {
        let (net, _) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        let err = sol.insert(Schedule::new(IntersectionId(99))).unwrap_err();
        assert!(matches!(err, PlanError::UnknownIntersection(IntersectionId(99))));
    }

    #[test]
    fn empty_schedule_rejected() {
        let (net, _) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule::new(IntersectionId(1))).expect("in range");
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::EmptySchedule(IntersectionId(1))));
    }

    #[test]
    fn foreign_street_rejected() {
        let (net, [_, _, c]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        // c ends at intersection 0, not 1
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![GreenSlot { street: c, green: 1 }],
        })
        .expect("in range");
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::StreetNotIncoming { .. }), "got {err}");
    }

    #[test]
    fn duplicate_street_rejected() {
        let (net, [a, ..]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![
                GreenSlot { street: a, green: 1 },
                GreenSlot { street: a, green: 2 },
            ],
        })
        .expect("in range");
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::DuplicateStreet { .. }), "got {err}");
    }

    #[test]
    fn zero_green_rejected() {
        let (net, [a, ..]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![GreenSlot { street: a, green: 0 }],
        })
        .expect("in range");
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::ZeroGreen { .. }), "got {err}");
    }

    #[test]
    fn over_horizon_rejected() {
        let (net, [a, ..]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![GreenSlot { street: a, green: net.horizon() + 1 }],
        })
        .expect("in range");
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::OverHorizon { .. }), "got {err}");
    }

    #[test]
    fn duration_exactly_horizon_is_fine() {
        let (net, [a, ..]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![GreenSlot { street: a, green: net.horizon() }],
        })
        .expect("in range");
        sol.validate(&net).expect("duration == horizon is allowed");
    }

    #[test]
    fn mismatched_intersection_rejected() {
        let (net, [a, ..]) = triangle();
        let mut sol = Solution::new(net.intersection_count());
        sol.insert(Schedule {
            intersection: IntersectionId(1),
            slots: vec![GreenSlot { street: a, green: 1 }],
        })
        .expect("in range");
        // simulate a bookkeeping bug: the stored schedule claims another id
        sol.get_mut(IntersectionId(1)).expect("present").intersection = IntersectionId(2);
        let err = sol.validate(&net).unwrap_err();
        assert!(matches!(err, PlanError::IntersectionMismatch { .. }), "got {err}");
    }

    #[test]
    fn iteration_is_ascending() {
        let (net, _) = triangle();
        let sol = Solution::trivial(&net);
        let ids: Vec<_> = sol.iter().map(|(i, _)| i).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
