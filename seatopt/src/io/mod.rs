mod export;
mod import;

/// External (serializable) representations of all seating-related entities.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use import::import;
