use std::cmp::Reverse;
use std::time::Instant;

use itertools::Itertools;
use log::info;
use seatopt::entities::{SeatingInstance, SeatingPlan, SeatingProblem};
use seatopt::util::assertions::plan_covers_instance;

/// Best-Fit-Decreasing optimizer for seating assignment.
///
/// Seats the largest parties first, while the most table options are still
/// open, each at the smallest free table that fits it. A polynomial-time
/// heuristic, not an exact minimizer: exact minimum-waste assignment is a
/// harder combinatorial problem, and O(n·m) determinism wins here.
pub struct BFDOptimizer {
    pub instance: SeatingInstance,
    pub problem: SeatingProblem,
}

impl BFDOptimizer {
    pub fn new(instance: SeatingInstance) -> Self {
        let problem = SeatingProblem::new(instance.clone());
        Self { instance, problem }
    }

    pub fn solve(&mut self) -> SeatingPlan {
        let start = Instant::now();

        for party_idx in party_seating_order(&self.instance) {
            let party = self.instance.parties[party_idx];
            match best_fit(&self.problem, party.size) {
                Some(table_idx) => {
                    let table = self.instance.tables[table_idx];
                    self.problem.assign(party_idx, table_idx);
                    info!(
                        "[BFD] seating party {} (size {}) at table {} (capacity {}), waste {}",
                        party.id,
                        party.size,
                        table.id,
                        table.capacity,
                        table.capacity - party.size
                    );
                }
                None => {
                    self.problem.mark_unseated(party_idx);
                    info!(
                        "[BFD] no free table fits party {} (size {}), leaving it unseated",
                        party.id, party.size
                    );
                }
            }
        }

        let plan = self.problem.save();
        debug_assert!(plan_covers_instance(&plan, &self.instance));

        info!(
            "[BFD] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[BFD] seated {}/{} parties, total waste {}, utilization {:.3}%",
            plan.seated_count(),
            self.instance.parties.len(),
            plan.total_waste,
            plan.utilization(&self.instance) * 100.0
        );

        plan
    }
}

/// Indices of the parties in seating order: size descending, stable, so
/// equally-sized parties keep their arrival order.
pub fn party_seating_order(instance: &SeatingInstance) -> Vec<usize> {
    (0..instance.parties.len())
        .sorted_by_key(|idx| Reverse(instance.parties[*idx].size))
        .collect_vec()
}

/// Index of the smallest free table with `capacity >= size`; on capacity ties
/// the table appearing earliest in the input list wins. `None` if nothing
/// fits.
pub fn best_fit(problem: &SeatingProblem, size: u32) -> Option<usize> {
    problem
        .free_tables()
        .filter(|(_, table)| table.capacity >= size)
        .min_by_key(|&(idx, table)| (table.capacity, idx))
        .map(|(idx, _)| idx)
}
