//! Core library for restaurant waitlist seating assignment.
//!
//! Models one optimization request as an immutable [`entities::SeatingInstance`]
//! (waiting parties + free tables), tracks the assignment state in a
//! [`entities::SeatingProblem`] and snapshots the outcome as an
//! [`entities::SeatingPlan`]. The library enforces mechanics (a party never
//! gets a table smaller than its size, a table is consumed at most once);
//! deciding *which* table a party gets is left to an optimizer such as the
//! `bfd` crate.

/// Entities to model a seating assignment request and its outcome
pub mod entities;

/// Importing request instances into and exporting plans out of this library
pub mod io;

/// Change notification seam between a queue store and optimizer drivers
pub mod notify;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::InvalidInput;
