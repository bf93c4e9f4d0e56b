use thiserror::Error;

/// Precondition violations of a seating request.
///
/// Raised before any optimization runs: a request either validates fully and
/// yields a complete plan, or fails with one of these. Parties that cannot be
/// seated are *not* errors, they are part of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("duplicate party id: {0}")]
    DuplicatePartyId(u64),

    #[error("duplicate table id: {0}")]
    DuplicateTableId(u64),

    #[error("party {0} has size 0, sizes must be strictly positive")]
    ZeroPartySize(u64),

    #[error("table {0} has capacity 0, capacities must be strictly positive")]
    ZeroTableCapacity(u64),
}
