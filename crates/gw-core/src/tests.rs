//! Unit tests for gw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IntersectionId, StreetId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = StreetId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StreetId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StreetId(0) < StreetId(1));
        assert!(IntersectionId(100) > IntersectionId(99));
        assert!(VehicleId(3) < VehicleId(4));
    }

    #[test]
    fn try_from_oversized_fails() {
        assert!(StreetId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(StreetId(7).to_string(), "StreetId(7)");
        assert_eq!(IntersectionId(0).to_string(), "IntersectionId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn tick_ordering() {
        assert!(Tick::ZERO < Tick(1));
        assert!(Tick(6) <= Tick(6));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod rng {
    use crate::SearchRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SearchRng::new(12345);
        let mut r2 = SearchRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn derived_streams_differ() {
        let mut r0 = SearchRng::derived(1, 0);
        let mut r1 = SearchRng::derived(1, 1);
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "adjacent instance streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SearchRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0usize..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SearchRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut a = [1u32, 2, 3, 4, 5, 6, 7, 8];
        let mut b = a;
        SearchRng::new(9).shuffle(&mut a);
        SearchRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);
        let mut sorted = a;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8], "shuffle must permute, not alter");
    }

    #[test]
    fn choose_multiple_distinct() {
        let pool = [10u32, 20, 30, 40, 50];
        let mut rng = SearchRng::new(3);
        let picked = rng.choose_multiple(&pool, 3);
        assert_eq!(picked.len(), 3);
        let mut dedup = picked.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 3, "selection must not repeat elements");
        // asking for more than the pool yields the whole pool
        assert_eq!(rng.choose_multiple(&pool, 99).len(), pool.len());
    }
}
