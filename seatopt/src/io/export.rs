use crate::entities::{SeatingInstance, SeatingPlan};
use crate::io::ext_repr::{ExtAssignment, ExtSeatingPlan};

/// Exports a plan out of the library
pub fn export(instance: &SeatingInstance, plan: &SeatingPlan) -> ExtSeatingPlan {
    ExtSeatingPlan {
        assignments: plan
            .assignments
            .iter()
            .map(|a| ExtAssignment {
                party_id: a.party_id,
                table_id: a.table_id,
                waste: a.waste,
            })
            .collect(),
        unseated: plan.unseated.iter().copied().collect(),
        unused_tables: plan.unused_tables.iter().copied().collect(),
        total_waste: plan.total_waste,
        utilization: plan.utilization(instance),
    }
}
