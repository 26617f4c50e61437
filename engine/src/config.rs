//! Engine configuration.

use pointhouse_types::{DAILY_LIMIT, MAX_BET, MIN_BET, STARTING_BALANCE};
use serde::{Deserialize, Serialize};

/// Platform-wide tunables for the game engine.
///
/// Defaults come from `pointhouse_types::constants`; deployments override
/// them via any serde source (missing fields keep their defaults).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum accepted bet, in points.
    pub min_bet: u64,
    /// Maximum accepted bet, in points.
    pub max_bet: u64,
    /// Per-user daily net win/loss ceiling, in points.
    pub daily_limit: u64,
    /// Balance granted to accounts provisioned through the engine's store
    /// helpers (account creation itself is out of scope).
    pub starting_balance: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_bet: MIN_BET,
            max_bet: MAX_BET,
            daily_limit: DAILY_LIMIT,
            starting_balance: STARTING_BALANCE,
        }
    }
}
