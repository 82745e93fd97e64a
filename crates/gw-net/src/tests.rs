//! Unit tests for the network model.

#[cfg(test)]
mod helpers {
    use gw_core::{IntersectionId, StreetId};

    use crate::{Network, NetworkBuilder};

    /// Three intersections in a loop (a: 0→1, b: 1→2, c: 2→0) with one
    /// vehicle driving a→b.  Street c carries no traffic.
    pub fn triangle() -> (Network, [StreetId; 3]) {
        let mut b = NetworkBuilder::new(6, 1000, 3);
        let a_st = b.add_street("a-st", IntersectionId(0), IntersectionId(1), 1);
        let b_st = b.add_street("b-st", IntersectionId(1), IntersectionId(2), 1);
        let c_st = b.add_street("c-st", IntersectionId(2), IntersectionId(0), 1);
        b.add_vehicle(vec![a_st, b_st]);
        let net = b.build().expect("triangle network is valid");
        (net, [a_st, b_st, c_st])
    }
}

#[cfg(test)]
mod builder {
    use gw_core::{IntersectionId, StreetId};

    use super::helpers::triangle;
    use crate::{NetError, NetworkBuilder};

    #[test]
    fn ids_are_sequential() {
        let (net, [a, b, c]) = triangle();
        assert_eq!((a, b, c), (StreetId(0), StreetId(1), StreetId(2)));
        assert_eq!(net.street_count(), 3);
        assert_eq!(net.intersection_count(), 3);
        assert_eq!(net.vehicle_count(), 1);
        assert_eq!(net.horizon(), 6);
        assert_eq!(net.bonus(), 1000);
    }

    #[test]
    fn csr_adjacency() {
        let (net, [a, b, c]) = triangle();
        assert_eq!(net.incoming(IntersectionId(0)), &[c]);
        assert_eq!(net.incoming(IntersectionId(1)), &[a]);
        assert_eq!(net.incoming(IntersectionId(2)), &[b]);
        assert_eq!(net.outgoing(IntersectionId(0)), &[a]);
        assert_eq!(net.outgoing(IntersectionId(1)), &[b]);
        assert_eq!(net.outgoing(IntersectionId(2)), &[c]);
    }

    #[test]
    fn incoming_slices_are_sorted() {
        // Two streets into intersection 1, declared out of id order relative
        // to nothing in particular — CSR must still list them ascending.
        let mut bld = NetworkBuilder::new(10, 100, 2);
        let s0 = bld.add_street("x", IntersectionId(0), IntersectionId(1), 1);
        let s1 = bld.add_street("y", IntersectionId(0), IntersectionId(1), 2);
        let back = bld.add_street("z", IntersectionId(1), IntersectionId(0), 1);
        bld.add_vehicle(vec![s0, back]);
        bld.add_vehicle(vec![s1, back]);
        let net = bld.build().expect("valid");
        assert_eq!(net.incoming(IntersectionId(1)), &[s0, s1]);
    }

    #[test]
    fn name_lookup() {
        let (net, [a, ..]) = triangle();
        assert_eq!(net.street_by_name("a-st"), Some(a));
        assert_eq!(net.street_by_name("no-such-street"), None);
        assert_eq!(net.street(a).name, "a-st");
    }

    #[test]
    fn used_flags() {
        let (net, [a, b, c]) = triangle();
        assert!(net.is_used(a));
        assert!(net.is_used(b));
        assert!(!net.is_used(c), "street with no traffic must stay unused");
    }

    #[test]
    fn endpoint_out_of_range() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        bld.add_street("bad", IntersectionId(0), IntersectionId(5), 1);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::EndpointOutOfRange { .. }), "got {err}");
    }

    #[test]
    fn zero_length_street() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        bld.add_street("flat", IntersectionId(0), IntersectionId(1), 0);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::ZeroLengthStreet { .. }), "got {err}");
    }

    #[test]
    fn duplicate_street_name() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        bld.add_street("twin", IntersectionId(0), IntersectionId(1), 1);
        bld.add_street("twin", IntersectionId(1), IntersectionId(0), 1);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::DuplicateStreetName(name) if name == "twin"));
    }

    #[test]
    fn path_too_short() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        let s = bld.add_street("solo", IntersectionId(0), IntersectionId(1), 1);
        bld.add_vehicle(vec![s]);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::PathTooShort { len: 1, .. }), "got {err}");
    }

    #[test]
    fn disconnected_path() {
        let mut bld = NetworkBuilder::new(10, 100, 3);
        let a = bld.add_street("a", IntersectionId(0), IntersectionId(1), 1);
        let c = bld.add_street("c", IntersectionId(2), IntersectionId(0), 1);
        bld.add_vehicle(vec![a, c]);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::DisconnectedPath { .. }), "got {err}");
    }

    #[test]
    fn repeated_street_in_path() {
        // Connected loop so the repeat check is what fires, not connectivity.
        let mut bld = NetworkBuilder::new(10, 100, 2);
        let out = bld.add_street("out", IntersectionId(0), IntersectionId(1), 1);
        let back = bld.add_street("back", IntersectionId(1), IntersectionId(0), 1);
        bld.add_vehicle(vec![out, back, out]);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::RepeatedStreet { street, .. } if street == "out"));
    }

    #[test]
    fn same_street_in_two_paths_is_fine() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        let out = bld.add_street("out", IntersectionId(0), IntersectionId(1), 1);
        let back = bld.add_street("back", IntersectionId(1), IntersectionId(0), 1);
        bld.add_vehicle(vec![out, back]);
        bld.add_vehicle(vec![out, back]);
        assert!(bld.build().is_ok());
    }

    #[test]
    fn street_out_of_range() {
        let mut bld = NetworkBuilder::new(10, 100, 2);
        let s = bld.add_street("s", IntersectionId(0), IntersectionId(1), 1);
        bld.add_vehicle(vec![s, StreetId(9)]);
        let err = bld.build().unwrap_err();
        assert!(matches!(err, NetError::StreetOutOfRange { street: StreetId(9), .. }));
    }
}
