use crate::{GameType, XP_BET_DIVISOR};
use serde::{Deserialize, Serialize};

/// Per-user play statistics, owned 1:1 by a user.
///
/// Created lazily on the first resolved game and mutated after every
/// settlement. A game with any payout (including a push, where the stake
/// comes back) extends the win streak; only a full loss breaks it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub total_wins: u64,
    pub total_losses: u64,
    pub win_streak: u32,
    pub best_win_streak: u32,
    /// The last game type played.
    pub favorite_game: Option<GameType>,
    pub xp: u64,
}

impl PlayerProfile {
    /// Fold one settled game into the statistics.
    pub fn record_game(&mut self, game: GameType, bet_amount: u64, win_amount: u64) {
        if win_amount > 0 {
            self.total_wins += 1;
            self.win_streak += 1;
            if self.win_streak > self.best_win_streak {
                self.best_win_streak = self.win_streak;
            }
        } else {
            self.total_losses += 1;
            self.win_streak = 0;
        }
        self.favorite_game = Some(game);
        self.xp += bet_amount / XP_BET_DIVISOR;
    }
}
