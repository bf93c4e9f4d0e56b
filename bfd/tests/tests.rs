#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use bfd::config::BFDConfig;
    use bfd::io::output::wait_estimates;
    use bfd::opt::BFDOptimizer;
    use seatopt::entities::{Party, SeatingInstance, SeatingPlan, Table};
    use seatopt::util::assertions::plan_covers_instance;

    fn instance(parties: &[(u64, u32)], tables: &[(u64, u32)]) -> SeatingInstance {
        SeatingInstance::new(
            parties.iter().map(|&(id, size)| Party::new(id, size)).collect(),
            tables.iter().map(|&(id, capacity)| Table::new(id, capacity)).collect(),
        )
        .expect("instance should be valid")
    }

    fn solve(instance: &SeatingInstance) -> SeatingPlan {
        BFDOptimizer::new(instance.clone()).solve()
    }

    #[test]
    fn evening_walk_ins_seat_with_two_wasted_seats() {
        let instance = instance(
            &[(1, 5), (2, 4), (3, 3), (4, 2)],
            &[(1, 2), (2, 4), (3, 4), (4, 6)],
        );
        let plan = solve(&instance);

        let decisions: Vec<(u64, u64, u32)> = plan
            .assignments
            .iter()
            .map(|a| (a.party_id, a.table_id, a.waste))
            .collect();
        assert_eq!(decisions, vec![(1, 4, 1), (2, 2, 0), (3, 3, 1), (4, 1, 0)]);
        assert_eq!(plan.total_waste, 2);
        assert!(plan.unseated.is_empty());
        assert!(plan.unused_tables.is_empty());
        assert!(plan_covers_instance(&plan, &instance));
    }

    #[test]
    fn party_larger_than_every_table_stays_unseated() {
        let instance = instance(&[(1, 5)], &[(1, 2)]);
        let plan = solve(&instance);

        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unseated, BTreeSet::from([1]));
        assert_eq!(plan.unused_tables, BTreeSet::from([1]));
        assert_eq!(plan.total_waste, 0);
    }

    #[test]
    fn no_tables_leaves_every_party_unseated() {
        let instance = instance(&[(1, 2), (2, 4), (3, 1)], &[]);
        let plan = solve(&instance);

        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unseated, BTreeSet::from([1, 2, 3]));
        assert!(plan.unused_tables.is_empty());
        assert_eq!(plan.total_waste, 0);
    }

    #[test]
    fn empty_request_yields_empty_plan() {
        let plan = bfd::optimize(instance(&[], &[]));

        assert!(plan.assignments.is_empty());
        assert!(plan.unseated.is_empty());
        assert!(plan.unused_tables.is_empty());
        assert_eq!(plan.total_waste, 0);
    }

    #[test]
    fn equally_sized_parties_keep_arrival_order() {
        // three parties of four, two four-tops: earliest arrivals sit first
        let instance = instance(&[(10, 4), (11, 4), (12, 4)], &[(1, 4), (2, 4)]);
        let plan = solve(&instance);

        let seated: Vec<u64> = plan.assignments.iter().map(|a| a.party_id).collect();
        assert_eq!(seated, vec![10, 11]);
        assert_eq!(plan.unseated, BTreeSet::from([12]));
    }

    #[test]
    fn equal_capacity_tables_are_consumed_in_input_order() {
        let instance = instance(&[(1, 3)], &[(5, 4), (6, 4)]);
        let plan = solve(&instance);

        assert_eq!(plan.assignments[0].table_id, 5);
        assert_eq!(plan.unused_tables, BTreeSet::from([6]));
    }

    #[test]
    fn best_fit_prefers_snug_over_first() {
        // a first-fit scan would burn the eight-top on the couple
        let instance = instance(&[(1, 2), (2, 8)], &[(1, 8), (2, 2)]);
        let plan = solve(&instance);

        assert_eq!(plan.total_waste, 0);
        assert!(plan.unseated.is_empty());
    }

    #[test]
    fn identical_inputs_produce_byte_identical_plans() {
        let instance = instance(
            &[(1, 5), (2, 4), (3, 3), (4, 2), (5, 4), (6, 9)],
            &[(1, 2), (2, 4), (3, 4), (4, 6), (5, 8)],
        );

        let plan_a = solve(&instance);
        let plan_b = solve(&instance);
        assert_eq!(plan_a, plan_b);

        let json_a = serde_json::to_string(&seatopt::io::export(&instance, &plan_a)).unwrap();
        let json_b = serde_json::to_string(&seatopt::io::export(&instance, &plan_b)).unwrap();
        assert_eq!(json_a, json_b);
    }

    #[test]
    fn adequate_extra_table_seats_the_stranded_party() {
        let starved = instance(&[(1, 5)], &[(1, 2)]);
        assert_eq!(solve(&starved).unseated, BTreeSet::from([1]));

        let extended = instance(&[(1, 5)], &[(1, 2), (2, 5)]);
        let plan = solve(&extended);
        assert!(plan.unseated.is_empty());
        assert_eq!(plan.assignments[0].table_id, 2);
    }

    // Seeded sweep: capacity safety, bijection completeness and determinism
    // must hold on arbitrary well-formed inputs, and a table large enough for
    // any party always rescues exactly one unseated party (the largest).
    #[test]
    fn random_sweep_upholds_plan_invariants() {
        let mut rng = SmallRng::seed_from_u64(0);

        for _ in 0..300 {
            let n_parties = rng.random_range(0..12);
            let n_tables = rng.random_range(0..12);
            let parties: Vec<Party> = (0..n_parties)
                .map(|i| Party::new(i as u64, rng.random_range(1..=8)))
                .collect();
            let tables: Vec<Table> = (0..n_tables)
                .map(|i| Table::new(i as u64, rng.random_range(1..=10)))
                .collect();
            let instance = SeatingInstance::new(parties, tables).unwrap();

            let plan = solve(&instance);
            assert!(plan_covers_instance(&plan, &instance));
            assert_eq!(plan, solve(&instance));

            for assignment in &plan.assignments {
                let party = instance.party(assignment.party_id).unwrap();
                let table = instance.table(assignment.table_id).unwrap();
                assert!(table.capacity >= party.size);
                assert_eq!(assignment.waste, table.capacity - party.size);
            }

            // capacity 100 exceeds every other table, so the run is unchanged
            // until the first stranded party claims the new table
            let mut extended_tables = instance.tables.clone();
            extended_tables.push(Table::new(1000, 100));
            let extended = SeatingInstance::new(instance.parties.clone(), extended_tables).unwrap();
            let extended_plan = solve(&extended);

            assert_eq!(
                extended_plan.unseated.len(),
                plan.unseated.len().saturating_sub(1)
            );
            assert!(plan_covers_instance(&extended_plan, &extended));
        }
    }

    #[test_case("../assets/restaurant_evening.json"; "restaurant evening")]
    #[test_case("../assets/rush_hour.json"; "rush hour")]
    fn asset_instances_produce_complete_plans(instance_path: &str) {
        let ext_instance = bfd::io::read_instance(Path::new(instance_path)).unwrap();
        let instance = seatopt::io::import(&ext_instance).unwrap();

        let plan = BFDOptimizer::new(instance.clone()).solve();
        assert!(plan_covers_instance(&plan, &instance));
    }

    #[test]
    fn wait_estimates_follow_arrival_order() {
        let ext_instance = bfd::io::read_instance(Path::new("../assets/rush_hour.json")).unwrap();
        let instance = seatopt::io::import(&ext_instance).unwrap();
        let plan = BFDOptimizer::new(instance.clone()).solve();
        let ext_plan = seatopt::io::export(&instance, &plan);

        // parties of 8, 7, 3 and the last couple outsize or outnumber the tables
        assert_eq!(ext_plan.unseated, vec![105, 106, 107, 110]);

        let estimates = wait_estimates(&ext_instance, &ext_plan, &BFDConfig::default());
        let by_party: Vec<(u64, u64)> = estimates
            .iter()
            .map(|e| (e.party_id, e.estimated_wait_min))
            .collect();
        assert_eq!(by_party, vec![(105, 0), (106, 10), (107, 20), (110, 30)]);
        assert_eq!(estimates[0].party_name.as_deref(), Some("Adeyemi"));
    }
}
