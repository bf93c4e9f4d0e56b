use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

#[doc(inline)]
pub use opt::optimize;

/// Epoch of the process, used to stamp log lines and measure run times.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
