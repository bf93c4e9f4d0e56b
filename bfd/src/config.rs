use serde::{Deserialize, Serialize};

/// Configuration for the BFD runner.
///
/// The algorithm itself has no tunables; these knobs only affect reporting.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BFDConfig {
    /// Estimated minutes of wait per unseated party ahead in the queue,
    /// used for the wait estimates in the solution file
    pub avg_minutes_per_position: u64,
}

impl Default for BFDConfig {
    fn default() -> Self {
        Self {
            avg_minutes_per_position: 10,
        }
    }
}
