use crate::{UserId, LEADERBOARD_SIZE};
use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub points: u64,
    pub rank: u32,
}

/// Top players by points balance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Record a user's new balance, re-sort, and keep the top entries.
    pub fn update(&mut self, user_id: &UserId, points: u64) {
        // Remove any existing entry for this user
        self.entries.retain(|e| &e.user_id != user_id);

        self.entries.push(LeaderboardEntry {
            user_id: user_id.clone(),
            points,
            rank: 0,
        });

        // Sort by points descending
        self.entries.sort_by(|a, b| b.points.cmp(&a.points));

        self.entries.truncate(LEADERBOARD_SIZE);
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
        }
    }
}
