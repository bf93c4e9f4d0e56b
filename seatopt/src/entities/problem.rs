use std::collections::BTreeSet;

use crate::entities::{Assignment, SeatingInstance, SeatingPlan, Table};
use crate::util::assertions::plan_is_consistent;

/// Dynamic counterpart of [`SeatingInstance`].
///
/// Tracks which tables are still free and which decisions have been recorded.
/// The problem enforces the mechanics (a party must fit its table, a table is
/// consumed at most once); choosing the table is the optimizer's job.
#[derive(Debug, Clone)]
pub struct SeatingProblem {
    pub instance: SeatingInstance,
    /// Decisions in the order they were made
    pub assignments: Vec<Assignment>,
    /// Ids of parties recorded as unseatable
    pub unseated: BTreeSet<u64>,
    /// Index-aligned with `instance.tables`, false once consumed
    table_free: Vec<bool>,
}

impl SeatingProblem {
    pub fn new(instance: SeatingInstance) -> SeatingProblem {
        let table_free = vec![true; instance.tables.len()];
        SeatingProblem {
            instance,
            assignments: Vec::new(),
            unseated: BTreeSet::new(),
            table_free,
        }
    }

    /// Tables not yet consumed by an assignment, in input order.
    pub fn free_tables(&self) -> impl Iterator<Item = (usize, &Table)> {
        self.instance
            .tables
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.table_free[*idx])
    }

    /// Seats the party at `party_idx` at the table at `table_idx`, consuming
    /// the table for the rest of the call.
    pub fn assign(&mut self, party_idx: usize, table_idx: usize) {
        let party = self.instance.parties[party_idx];
        let table = self.instance.tables[table_idx];
        assert!(self.table_free[table_idx], "table {} already consumed", table.id);
        assert!(
            table.capacity >= party.size,
            "party {} (size {}) does not fit table {} (capacity {})",
            party.id,
            party.size,
            table.id,
            table.capacity
        );

        self.table_free[table_idx] = false;
        self.assignments.push(Assignment {
            party_id: party.id,
            table_id: table.id,
            waste: table.capacity - party.size,
        });
    }

    /// Records that no remaining table can hold the party at `party_idx`.
    pub fn mark_unseated(&mut self, party_idx: usize) {
        self.unseated.insert(self.instance.parties[party_idx].id);
    }

    /// Snapshot of the current state as a [`SeatingPlan`].
    pub fn save(&self) -> SeatingPlan {
        let plan = SeatingPlan {
            assignments: self.assignments.clone(),
            unseated: self.unseated.clone(),
            unused_tables: self.free_tables().map(|(_, t)| t.id).collect(),
            total_waste: self.assignments.iter().map(|a| a.waste as u64).sum(),
        };

        debug_assert!(plan_is_consistent(&plan, &self.instance));

        plan
    }
}
