use crate::{GameType, Symbol};
use serde::{Deserialize, Serialize};

/// A resolved random draw, one variant per game.
///
/// Cards are encoded as `0..=51` (suit = card / 13, rank = card % 13 with
/// 0 as Ace); blackjack hands carry flattened point values in `1..=11`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "game")]
pub enum Outcome {
    Dice {
        roll: u8,
    },
    Slots {
        reels: [Symbol; 3],
    },
    Blackjack {
        player: [u8; 2],
        dealer: [u8; 2],
    },
    Roulette {
        pocket: u8,
    },
    Poker {
        player: [u8; 5],
        dealer: [u8; 5],
    },
    Lottery {
        drawn: [u8; 6],
    },
}

impl Outcome {
    /// The game this outcome was drawn for.
    pub fn game_type(&self) -> GameType {
        match self {
            Outcome::Dice { .. } => GameType::Dice,
            Outcome::Slots { .. } => GameType::Slots,
            Outcome::Blackjack { .. } => GameType::Blackjack,
            Outcome::Roulette { .. } => GameType::Roulette,
            Outcome::Poker { .. } => GameType::Poker,
            Outcome::Lottery { .. } => GameType::Lottery,
        }
    }
}

/// The result of a settled play, returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    pub game_type: GameType,
    pub outcome: Outcome,
    /// Human-readable outcome summary, identical to the audit record text.
    pub outcome_description: String,
    pub bet_amount: u64,
    /// Gross payout (includes the returned stake on pushes); zero on a loss.
    pub win_amount: u64,
    pub new_balance: u64,
}
