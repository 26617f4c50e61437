use serde::{Deserialize, Serialize};
use std::fmt;

/// Casino game variants offered by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Dice,
    Slots,
    Blackjack,
    Roulette,
    Poker,
    Lottery,
}

impl GameType {
    /// All game types, in a stable order.
    pub const ALL: [GameType; 6] = [
        GameType::Dice,
        GameType::Slots,
        GameType::Blackjack,
        GameType::Roulette,
        GameType::Poker,
        GameType::Lottery,
    ];

    /// Stable lowercase label, matching the audit-record `game_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Dice => "dice",
            GameType::Slots => "slots",
            GameType::Blackjack => "blackjack",
            GameType::Roulette => "roulette",
            GameType::Poker => "poker",
            GameType::Lottery => "lottery",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot machine reel alphabet (8 symbols, uniformly weighted).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Bell,
    Star,
    Diamond,
    Seven,
}

impl Symbol {
    /// All reel symbols, in reel order.
    pub const ALL: [Symbol; 8] = [
        Symbol::Cherry,
        Symbol::Lemon,
        Symbol::Orange,
        Symbol::Grape,
        Symbol::Bell,
        Symbol::Star,
        Symbol::Diamond,
        Symbol::Seven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Cherry => "cherry",
            Symbol::Lemon => "lemon",
            Symbol::Orange => "orange",
            Symbol::Grape => "grape",
            Symbol::Bell => "bell",
            Symbol::Star => "star",
            Symbol::Diamond => "diamond",
            Symbol::Seven => "seven",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
