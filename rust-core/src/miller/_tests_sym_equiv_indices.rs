#[cfg(test)]
mod _tests_sym_equiv_indices {
    use super::super::index::is_in_canonical_hemisphere;
    use super::super::sym_equiv_indices::SymEquivMillerIndices;
    use crate::interfaces::{AngleUnit, MillerIndex};
    use crate::symmetries::space_group::SpaceGroup;
    use crate::symmetries::space_group_catalog::{
        c2, fm_3m, p1, p2_1, p2_12_12_1, p2_1_c, p4_1, p6_3, p_1, r3,
    };
    use nalgebra::Vector3;
    use std::collections::HashSet;

    const TOL: f64 = 1e-10;

    fn catalogue() -> Vec<SpaceGroup> {
        [p1(), p_1(), p2_1(), p2_1_c(), c2(), p2_12_12_1(), p4_1(), p6_3(), r3(), fm_3m()]
            .into_iter()
            .map(|sg| sg.unwrap())
            .collect()
    }

    fn index_grid(limit: i32) -> Vec<MillerIndex> {
        let mut out = Vec::new();
        for h in -limit..=limit {
            for k in -limit..=limit {
                for l in -limit..=limit {
                    out.push(Vector3::new(h, k, l));
                }
            }
        }
        out
    }

    fn as_tuple(h: &MillerIndex) -> (i32, i32, i32) {
        (h[0], h[1], h[2])
    }

    fn listed_h(semi: &SymEquivMillerIndices) -> Vec<(i32, i32, i32)> {
        semi.indices().iter().map(|e| as_tuple(&e.h())).collect()
    }

    #[test]
    fn test_inversion_only_group() {
        let sg = p_1().unwrap();
        assert_eq!(sg.tbf(), 12);
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));

        assert!(semi.is_centric());
        assert_eq!(semi.ht_restriction(), Some(0));
        assert_eq!(semi.phase_restriction().ht_angle(AngleUnit::Degrees), Some(0.0));
        assert_eq!(semi.n(), 1);
        assert_eq!(semi.epsilon(), 2);
        assert_eq!(semi.m(true), 1);
        assert_eq!(semi.m(false), 1);
        assert_eq!(semi.f_mates(true), 1);
        assert_eq!(semi.n_p1_listing(true), 1);
        assert_eq!(semi.n_p1_listing(false), 1);
        assert!(semi.is_valid_phase_default(0.0, AngleUnit::Degrees));
        assert!(!semi.is_valid_phase_default(90.0, AngleUnit::Degrees));
        assert_eq!(semi[0].h(), Vector3::new(1, 2, 3));
    }

    #[test]
    fn test_inversion_only_group_with_unit_base_factor() {
        let sg = SpaceGroup::from_xyz(&["-x,-y,-z"], crate::Centering::Primitive, 1).unwrap();
        assert_eq!(sg.order_p(), 2);
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert_eq!(semi.tbf(), 1);
        assert_eq!(semi.ht_restriction(), Some(0));
        assert_eq!(semi.n(), 1);
        assert_eq!(semi.epsilon(), 2);
        assert_eq!(semi.m(true), 1);
    }

    #[test]
    fn test_p1_acentric_mates() {
        let sg = p1().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert!(!semi.is_centric());
        assert_eq!(semi.n(), 1);
        assert_eq!(semi.epsilon(), 1);
        assert_eq!(semi.m(false), 1);
        assert_eq!(semi.m(true), 2);
        assert_eq!(semi.f_mates(true), 2);
        assert_eq!(semi.n_p1_listing(true), 1);
        assert_eq!(semi.flat(0).h(), Vector3::new(1, 2, 3));
        assert_eq!(semi.flat(1).h(), Vector3::new(-1, -2, -3));
        assert!(semi.flat(1).friedel_flag());
        assert!(semi.is_valid_phase_default(37.0, AngleUnit::Degrees));
    }

    #[test]
    fn test_p2_1_list_and_enumeration() {
        let sg = p2_1().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert!(!semi.is_centric());
        assert_eq!(listed_h(&semi), vec![(1, 2, 3), (-1, 2, -3)]);
        assert_eq!(semi[1].ht(), 0);

        let all: Vec<_> = semi.iter(true).map(|e| as_tuple(&e.h())).collect();
        assert_eq!(all, vec![(1, 2, 3), (-1, 2, -3), (-1, -2, -3), (1, -2, 3)]);

        let semi = sg.equiv_miller_indices(&Vector3::new(1, 3, 3));
        assert_eq!(semi[1].ht(), 6);
    }

    #[test]
    fn test_p2_1_c_canonical_representatives() {
        let sg = p2_1_c().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert!(semi.is_centric());
        assert_eq!(semi.n(), 2);
        assert_eq!(semi.epsilon(), 2);
        assert_eq!(semi.m(true), 2);
        assert_eq!(semi.n_p1_listing(true), 2);
        let distinct: HashSet<_> = semi.iter(true).map(|e| as_tuple(&e.h())).collect();
        assert_eq!(distinct.len(), semi.n_p1_listing(true));
        assert_eq!(listed_h(&semi), vec![(1, 2, 3), (1, -2, 3)]);
        assert_eq!(semi[0].ht(), 0);
        assert_eq!(semi[1].ht(), 6);
        assert!(semi.indices().iter().all(|e| !e.friedel_flag()));
    }

    #[test]
    fn test_list_independent_of_query_and_operation_order() {
        let sg = p2_1().unwrap();
        let a = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        let b = sg.equiv_miller_indices(&Vector3::new(-1, 2, -3));
        assert_eq!(listed_h(&a), listed_h(&b));

        let sg = p2_1_c().unwrap();
        let a = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        let b = sg.equiv_miller_indices(&Vector3::new(-1, -2, -3));
        assert_eq!(listed_h(&a), listed_h(&b));

        let mut reversed = sg.operations().to_vec();
        reversed.reverse();
        let sg_reversed = SpaceGroup::new(reversed, sg.tbf()).unwrap();
        let c = sg_reversed.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert_eq!(a, c);
    }

    #[test]
    fn test_absent_entries_independent_of_operation_order() {
        let sg = p2_1().unwrap();
        let mut reversed = sg.operations().to_vec();
        reversed.reverse();
        let sg_reversed = SpaceGroup::new(reversed, sg.tbf()).unwrap();

        let h = Vector3::new(0, 1, 0);
        assert!(sg.is_sys_absent(&h));
        let a = sg.equiv_miller_indices(&h);
        let b = sg_reversed.equiv_miller_indices(&h);
        assert_eq!(a.n(), 1);
        assert_eq!(a[0].ht(), 0);
        assert_eq!(a, b);

        for sg in catalogue() {
            let mut reversed = sg.operations().to_vec();
            reversed.reverse();
            let sg_reversed = SpaceGroup::new(reversed, sg.tbf()).unwrap();
            for h in index_grid(2) {
                let forward = sg.equiv_miller_indices(&h);
                let backward = sg_reversed.equiv_miller_indices(&h);
                assert_eq!(forward.indices(), backward.indices(), "{h:?}");
            }
        }
    }

    #[test]
    fn test_centering_and_special_positions() {
        let sg = c2().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 1, 0));
        assert_eq!(semi.n(), 2);
        assert_eq!(semi.epsilon(), 1);

        let semi = sg.equiv_miller_indices(&Vector3::new(0, 2, 0));
        assert_eq!(semi.n(), 1);
        assert_eq!(semi.epsilon(), 2);
        assert!(!semi.is_centric());
    }

    #[test]
    fn test_cubic_epsilon() {
        let sg = fm_3m().unwrap();
        assert_eq!(sg.equiv_miller_indices(&Vector3::new(1, 1, 1)).n(), 4);
        assert_eq!(sg.epsilon(&Vector3::new(1, 1, 1)), 12);
        assert_eq!(sg.epsilon(&Vector3::new(2, 0, 0)), 16);
        assert_eq!(sg.epsilon(&Vector3::new(1, 2, 3)), 2);
        assert_eq!(sg.epsilon(&Vector3::new(0, 0, 0)), 48);
    }

    #[test]
    fn test_epsilon_times_n_is_point_group_order() {
        for sg in catalogue() {
            for h in index_grid(3) {
                let semi = sg.equiv_miller_indices(&h);
                assert_eq!(semi.order_p(), sg.order_p());
                assert_eq!(semi.epsilon() * semi.n(), sg.order_p(), "h = {h:?}");
            }
        }
    }

    #[test]
    fn test_multiplicity_rules() {
        for sg in catalogue() {
            for h in index_grid(2) {
                let semi = sg.equiv_miller_indices(&h);
                assert_eq!(semi.m(false), semi.n());
                let expected = if semi.is_centric() { semi.n() } else { 2 * semi.n() };
                assert_eq!(semi.m(true), expected);
                assert_eq!(semi.m(true), semi.n() * semi.f_mates(true));
                assert_eq!(sg.multiplicity(&h, true), expected);
            }
        }
    }

    #[test]
    fn test_flat_enumeration_matches_nested_loop() {
        for sg in catalogue() {
            for h in index_grid(2) {
                let semi = sg.equiv_miller_indices(&h);
                for friedel_flag in [false, true] {
                    let mut nested = Vec::new();
                    for i_list in 0..semi.n() {
                        for i_mate in 0..semi.f_mates(friedel_flag) {
                            nested.push(semi.at(i_mate, i_list));
                        }
                    }
                    let mut flat: Vec<_> = (0..semi.m(friedel_flag)).map(|i| semi.flat(i)).collect();
                    assert_eq!(flat.len(), nested.len());

                    let key = |e: &crate::SymEquivIndex| (as_tuple(&e.h()), e.ht(), e.friedel_flag());
                    nested.sort_by_key(key);
                    flat.sort_by_key(key);
                    assert_eq!(flat, nested);

                    let distinct: HashSet<_> = flat.iter().map(|e| as_tuple(&e.h())).collect();
                    assert_eq!(distinct.len(), flat.len(), "duplicate reflection for {h:?}");

                    assert_eq!(semi.iter(friedel_flag).count(), semi.m(friedel_flag));
                }
            }
        }
    }

    #[test]
    fn test_centric_lists_are_canonical() {
        for sg in catalogue() {
            for h in index_grid(2) {
                let semi = sg.equiv_miller_indices(&h);
                if semi.is_centric() {
                    assert!(semi.indices().iter().all(|e| is_in_canonical_hemisphere(&e.h())));
                    let angle = semi.phase_restriction().ht_angle(AngleUnit::Degrees).unwrap();
                    assert!((0.0..180.0).contains(&angle));
                    assert!(semi.is_valid_phase_default(angle, AngleUnit::Degrees));
                } else {
                    assert!(semi.is_valid_phase_default(123.4, AngleUnit::Degrees));
                }
            }
        }
    }

    #[test]
    fn test_restriction_agrees_with_absence_test() {
        for sg in catalogue() {
            for h in index_grid(2) {
                let t = sg.sys_absent_test(&h);
                if t.is_sys_absent() {
                    continue;
                }
                let semi = sg.equiv_miller_indices(&h);
                assert_eq!(semi.is_centric(), t.is_centric(), "h = {h:?}");
                if let Some(ht) = semi.ht_restriction() {
                    assert_eq!(t.ht_restriction(), ht);
                }
            }
        }
    }

    #[test]
    fn test_phase_transforms_of_entries() {
        let sg = p4_1().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 2, 3));
        assert_eq!(semi.n(), 4);
        for e in semi.iter(true) {
            let phi = 0.7;
            let back = e.phase_in(e.phase_eq(phi, AngleUnit::Radians), AngleUnit::Radians);
            assert!((back - phi).abs() < TOL);
        }
    }

    #[test]
    fn test_low_level_access() {
        let sg = p6_3().unwrap();
        let semi = sg.equiv_miller_indices(&Vector3::new(1, 0, 1));
        assert_eq!(semi.n(), 6);
        for i in 0..semi.n() {
            assert_eq!(semi[i], semi.indices()[i]);
            assert_eq!(semi.at(0, i), semi[i]);
            assert_eq!(semi.at(1, i).h(), -semi[i].h());
        }
    }

    #[test]
    #[should_panic]
    fn test_flat_out_of_range_panics() {
        let semi = p1().unwrap().equiv_miller_indices(&Vector3::new(1, 0, 0));
        semi.flat(2);
    }
}
