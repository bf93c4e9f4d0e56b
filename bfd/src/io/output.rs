use seatopt::io::ext_repr::{ExtSeatingInstance, ExtSeatingPlan};
use serde::{Deserialize, Serialize};

use crate::config::BFDConfig;

/// Plan file written by the CLI: the echoed instance, the plan, wait
/// estimates for whoever is still waiting, and the config used.
#[derive(Serialize, Deserialize, Clone)]
pub struct BFDOutput {
    pub instance: ExtSeatingInstance,
    pub plan: ExtSeatingPlan,
    /// Estimated waits for the unseated parties, in arrival order
    pub wait_estimates: Vec<WaitEstimate>,
    pub config: BFDConfig,
    /// Wall-clock duration of the optimization run in milliseconds
    pub run_time_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WaitEstimate {
    pub party_id: u64,
    /// Display name, if the queue store tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    /// Unseated parties ahead in arrival order, times the configured
    /// per-position multiplier. The party first in line gets 0: it is next up.
    pub estimated_wait_min: u64,
}

/// Wait estimates for every party the plan leaves unseated, in the arrival
/// order of the input.
pub fn wait_estimates(
    ext_instance: &ExtSeatingInstance,
    plan: &ExtSeatingPlan,
    config: &BFDConfig,
) -> Vec<WaitEstimate> {
    ext_instance
        .parties
        .iter()
        .filter(|p| plan.unseated.contains(&p.id))
        .enumerate()
        .map(|(ahead, p)| WaitEstimate {
            party_id: p.id,
            party_name: p.name.clone(),
            estimated_wait_min: ahead as u64 * config.avg_minutes_per_position,
        })
        .collect()
}
