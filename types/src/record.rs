use crate::{GameType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit entry, one per resolved game.
///
/// Immutable once written; downstream consumers (achievements, analytics,
/// notifications) read these and the returned `PlayResult` but never write
/// balance or limit state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub user_id: UserId,
    pub game_type: GameType,
    pub bet_amount: u64,
    pub win_amount: u64,
    /// Human-readable outcome summary (roll, reels, cards, numbers).
    pub outcome: String,
    pub played_at: DateTime<Utc>,
}

impl GameRecord {
    pub fn new(
        user_id: UserId,
        game_type: GameType,
        bet_amount: u64,
        win_amount: u64,
        outcome: String,
        played_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            game_type,
            bet_amount,
            win_amount,
            outcome,
            played_at,
        }
    }
}
