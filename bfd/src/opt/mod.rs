mod bfd_opt;

#[doc(inline)]
pub use bfd_opt::BFDOptimizer;
#[doc(inline)]
pub use bfd_opt::best_fit;
#[doc(inline)]
pub use bfd_opt::party_seating_order;

use seatopt::entities::{SeatingInstance, SeatingPlan};

/// One-shot convenience: runs the BFD optimizer over an already-validated
/// instance and returns the finished plan.
pub fn optimize(instance: SeatingInstance) -> SeatingPlan {
    BFDOptimizer::new(instance).solve()
}
