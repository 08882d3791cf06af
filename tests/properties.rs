use std::collections::HashSet;

use grid_life::{BoundedLife, RuleSet, SparseLife};
use proptest::collection::vec;
use proptest::prelude::*;

const SIDE: usize = 12;

fn grid_cells() -> impl Strategy<Value = Vec<(i64, i64)>> {
    vec((0..SIDE as i64, 0..SIDE as i64), 0..48)
}

fn plane_cells() -> impl Strategy<Value = Vec<(i64, i64)>> {
    vec((-20i64..20, -20i64..20), 0..48)
}

fn valid_rules() -> impl Strategy<Value = RuleSet> {
    (0u8..=8, 0u8..=8, 0u8..=8).prop_map(|(a, b, birth)| {
        RuleSet::new(a.min(b), a.max(b), birth).expect("ordered thresholds within range")
    })
}

fn seeded_bounded(cells: &[(i64, i64)], wrap: bool) -> BoundedLife {
    let mut engine = BoundedLife::new(SIDE, SIDE, wrap).unwrap();
    for &(x, y) in cells {
        engine.toggle(x, y).unwrap();
    }
    engine
}

fn seeded_sparse(cells: &[(i64, i64)]) -> SparseLife {
    let mut engine = SparseLife::new();
    for &(x, y) in cells {
        engine.toggle(x, y);
    }
    engine
}

proptest! {
    #[test]
    fn double_toggle_restores_bounded(cells in grid_cells(), x in 0..SIDE as i64, y in 0..SIDE as i64, wrap: bool) {
        let mut engine = seeded_bounded(&cells, wrap);
        let before: Vec<_> = engine.live_coordinates().collect();
        engine.toggle(x, y).unwrap();
        engine.toggle(x, y).unwrap();
        let after: Vec<_> = engine.live_coordinates().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn double_toggle_restores_sparse(cells in plane_cells(), x: i64, y: i64) {
        let mut engine = seeded_sparse(&cells);
        let before: HashSet<_> = engine.live_coordinates().collect();
        engine.toggle(x, y);
        engine.toggle(x, y);
        let after: HashSet<_> = engine.live_coordinates().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn clear_resets_bounded(cells in grid_cells(), steps in 0u64..6, wrap: bool) {
        let mut engine = seeded_bounded(&cells, wrap);
        engine.step_n(steps);
        engine.clear();
        prop_assert_eq!(engine.generation(), 0);
        for &(x, y) in &cells {
            prop_assert!(!engine.is_alive(x, y));
        }
    }

    #[test]
    fn clear_resets_sparse(cells in plane_cells(), steps in 0u64..6) {
        let mut engine = seeded_sparse(&cells);
        engine.step_n(steps);
        engine.clear();
        prop_assert_eq!(engine.generation(), 0);
        prop_assert_eq!(engine.bounds(), None);
        for &(x, y) in &cells {
            prop_assert!(!engine.is_alive(x, y));
        }
    }

    #[test]
    fn bounded_step_always_counts_one_generation(cells in grid_cells(), wrap: bool, rules in valid_rules()) {
        let mut engine = seeded_bounded(&cells, wrap);
        engine.set_rules(rules).unwrap();
        for expected in 1..=4u64 {
            engine.step();
            prop_assert_eq!(engine.generation(), expected);
        }
    }

    #[test]
    fn sparse_step_counts_one_generation_unless_empty(cells in plane_cells(), rules in valid_rules()) {
        let mut engine = seeded_sparse(&cells);
        engine.set_rules(rules).unwrap();
        let mut expected = 0u64;
        for _ in 0..4 {
            if !engine.is_empty() {
                expected += 1;
            }
            engine.step();
            prop_assert_eq!(engine.generation(), expected);
        }
    }

    #[test]
    fn any_valid_rules_are_accepted_by_both_engines(rules in valid_rules()) {
        let mut bounded = BoundedLife::new(SIDE, SIDE, false).unwrap();
        let mut sparse = SparseLife::new();
        prop_assert!(bounded.set_rules(rules).is_ok());
        prop_assert!(sparse.set_rules(rules).is_ok());
        prop_assert_eq!(bounded.rules(), sparse.rules());
    }

    #[test]
    fn sparse_bounds_are_live_extremes(cells in plane_cells(), steps in 0u64..4) {
        let mut engine = seeded_sparse(&cells);
        engine.step_n(steps);
        let live: Vec<_> = engine.live_coordinates().collect();
        match engine.bounds() {
            None => prop_assert!(live.is_empty()),
            Some(bounds) => {
                prop_assert!(!live.is_empty());
                prop_assert_eq!(bounds.min_x, live.iter().map(|c| c.0).min().unwrap());
                prop_assert_eq!(bounds.max_x, live.iter().map(|c| c.0).max().unwrap());
                prop_assert_eq!(bounds.min_y, live.iter().map(|c| c.1).min().unwrap());
                prop_assert_eq!(bounds.max_y, live.iter().map(|c| c.1).max().unwrap());
            }
        }
    }

    #[test]
    fn explicit_conway_matches_default(cells in plane_cells()) {
        let mut default = seeded_sparse(&cells);
        let mut explicit = seeded_sparse(&cells);
        explicit.set_rules(RuleSet::new(2, 3, 3).unwrap()).unwrap();
        for _ in 0..4 {
            default.step();
            explicit.step();
        }
        let a: HashSet<_> = default.live_coordinates().collect();
        let b: HashSet<_> = explicit.live_coordinates().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rulestring_round_trips(rules in valid_rules()) {
        prop_assert_eq!(rules.to_string().parse::<RuleSet>().unwrap(), rules);
    }

    #[test]
    fn out_of_range_thresholds_never_validate(min in 0u8..=20, max in 0u8..=20, birth in 0u8..=20) {
        let rules = RuleSet { survive_min: min, survive_max: max, birth_count: birth };
        let expected = min <= max && max <= 8 && birth <= 8;
        prop_assert_eq!(rules.validate().is_ok(), expected);
    }
}
