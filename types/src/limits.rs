use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cumulative win/loss bookkeeping for one user on one UTC calendar day.
///
/// One record exists per (user, day); records are created lazily with zeros
/// on the first play of a day and are never touched once the day rolls over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLimit {
    pub date: NaiveDate,
    pub total_won: u64,
    pub total_lost: u64,
    pub games_played: u32,
}

impl DailyLimit {
    /// A zeroed record for the given day.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            total_won: 0,
            total_lost: 0,
            games_played: 0,
        }
    }

    /// Magnitude of the day's net result, compared against the ceiling.
    pub fn net_magnitude(&self) -> u64 {
        self.total_won.abs_diff(self.total_lost)
    }

    /// Fold one settled game into the day's totals. A net-positive game
    /// adds its profit to `total_won`; anything else (including a push,
    /// which nets zero) adds the shortfall to `total_lost`.
    pub fn apply(&mut self, bet_amount: u64, win_amount: u64) {
        self.games_played += 1;
        if win_amount > bet_amount {
            self.total_won += win_amount - bet_amount;
        } else {
            self.total_lost += bet_amount - win_amount;
        }
    }
}
