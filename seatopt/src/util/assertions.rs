use std::collections::BTreeSet;

use crate::entities::{SeatingInstance, SeatingPlan};

/// Checks that a plan is internally consistent with the instance it was
/// computed for: no party or table referenced twice, assignments within
/// capacity with consistent waste, and `total_waste` adding up. Holds for
/// partial snapshots taken mid-optimization as well.
pub fn plan_is_consistent(plan: &SeatingPlan, instance: &SeatingInstance) -> bool {
    let mut seated_parties = BTreeSet::new();
    let mut consumed_tables = BTreeSet::new();

    for assignment in &plan.assignments {
        if !seated_parties.insert(assignment.party_id) {
            return false;
        }
        if !consumed_tables.insert(assignment.table_id) {
            return false;
        }
        let (Some(party), Some(table)) = (
            instance.party(assignment.party_id),
            instance.table(assignment.table_id),
        ) else {
            return false;
        };
        if table.capacity < party.size || assignment.waste != table.capacity - party.size {
            return false;
        }
    }

    seated_parties.is_disjoint(&plan.unseated)
        && consumed_tables.is_disjoint(&plan.unused_tables)
        && plan.unseated.iter().all(|id| instance.party(*id).is_some())
        && plan.unused_tables.iter().all(|id| instance.table(*id).is_some())
        && plan.total_waste == plan.assignments.iter().map(|a| a.waste as u64).sum::<u64>()
}

/// Checks the full bijection invariants of a finished plan: consistency plus
/// every input party id exactly once across assignments and `unseated`, and
/// every input table id exactly once across assignments and `unused_tables`.
pub fn plan_covers_instance(plan: &SeatingPlan, instance: &SeatingInstance) -> bool {
    if !plan_is_consistent(plan, instance) {
        return false;
    }

    let decided: BTreeSet<u64> = plan
        .assignments
        .iter()
        .map(|a| a.party_id)
        .chain(plan.unseated.iter().copied())
        .collect();
    let consumed: BTreeSet<u64> = plan
        .assignments
        .iter()
        .map(|a| a.table_id)
        .chain(plan.unused_tables.iter().copied())
        .collect();

    let all_parties: BTreeSet<u64> = instance.parties.iter().map(|p| p.id).collect();
    let all_tables: BTreeSet<u64> = instance.tables.iter().map(|t| t.id).collect();

    decided == all_parties && consumed == all_tables
}
