use crate::{GameType, ParamError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game-specific bet parameters, one variant per game.
///
/// Games without player choices (slots, blackjack, poker) carry no data;
/// their variant exists so a play request is always fully described by
/// `(bet_amount, BetParams)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "game")]
pub enum BetParams {
    /// Guess a die face in `1..=6`.
    Dice { guess: u8 },
    Slots,
    Blackjack,
    Roulette { bet: RouletteBet },
    Poker,
    /// Pick of lottery numbers as submitted by the caller. Count, range,
    /// and uniqueness are validated by the engine, not by construction,
    /// so malformed picks surface as typed errors instead of panics.
    Lottery { numbers: Vec<u8> },
}

impl BetParams {
    /// The game these parameters belong to.
    pub fn game_type(&self) -> GameType {
        match self {
            BetParams::Dice { .. } => GameType::Dice,
            BetParams::Slots => GameType::Slots,
            BetParams::Blackjack => GameType::Blackjack,
            BetParams::Roulette { .. } => GameType::Roulette,
            BetParams::Poker => GameType::Poker,
            BetParams::Lottery { .. } => GameType::Lottery,
        }
    }
}

/// Roulette color bet target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    /// The zero pocket. Pays like a straight bet on 0.
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighLow {
    /// 19-36.
    High,
    /// 1-18.
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dozen {
    /// 1-12.
    First,
    /// 13-24.
    Second,
    /// 25-36.
    Third,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// 1, 4, 7, ... 34.
    First,
    /// 2, 5, 8, ... 35.
    Second,
    /// 3, 6, 9, ... 36.
    Third,
}

/// A single roulette wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum RouletteBet {
    /// Single number in `0..=36` (35:1).
    Straight(u8),
    /// Red/black (1:1) or green, the zero pocket (35:1).
    Color(Color),
    /// Even/odd (1:1); zero wins neither.
    Parity(Parity),
    /// High/low half (1:1); zero wins neither.
    HighLow(HighLow),
    /// One of the three dozens (2:1).
    Dozen(Dozen),
    /// One of the three columns (2:1).
    Column(Column),
}

impl RouletteBet {
    /// Parse the transport-layer `(bet_type, bet_value)` string pair.
    ///
    /// `bet_type` is one of `number`, `color`, `even_odd`, `high_low`,
    /// `dozen`, `column`; `bet_value` semantics depend on the type
    /// (a number string for `number`, `red`/`black`/`green` for `color`,
    /// `first`/`second`/`third` for `dozen`, `1`/`2`/`3` for `column`).
    pub fn from_labels(bet_type: &str, bet_value: &str) -> Result<Self, ParamError> {
        let invalid = || ParamError::InvalidRouletteBetValue {
            bet_type: bet_type.to_string(),
            value: bet_value.to_string(),
        };
        match bet_type {
            "number" => {
                let number: u8 = bet_value.parse().map_err(|_| invalid())?;
                if number > 36 {
                    return Err(ParamError::RouletteNumberOutOfRange(number));
                }
                Ok(RouletteBet::Straight(number))
            }
            "color" => match bet_value {
                "red" => Ok(RouletteBet::Color(Color::Red)),
                "black" => Ok(RouletteBet::Color(Color::Black)),
                "green" => Ok(RouletteBet::Color(Color::Green)),
                _ => Err(invalid()),
            },
            "even_odd" => match bet_value {
                "even" => Ok(RouletteBet::Parity(Parity::Even)),
                "odd" => Ok(RouletteBet::Parity(Parity::Odd)),
                _ => Err(invalid()),
            },
            "high_low" => match bet_value {
                "high" => Ok(RouletteBet::HighLow(HighLow::High)),
                "low" => Ok(RouletteBet::HighLow(HighLow::Low)),
                _ => Err(invalid()),
            },
            "dozen" => match bet_value {
                "first" => Ok(RouletteBet::Dozen(Dozen::First)),
                "second" => Ok(RouletteBet::Dozen(Dozen::Second)),
                "third" => Ok(RouletteBet::Dozen(Dozen::Third)),
                _ => Err(invalid()),
            },
            "column" => match bet_value {
                "1" => Ok(RouletteBet::Column(Column::First)),
                "2" => Ok(RouletteBet::Column(Column::Second)),
                "3" => Ok(RouletteBet::Column(Column::Third)),
                _ => Err(invalid()),
            },
            _ => Err(ParamError::UnknownRouletteBetType(bet_type.to_string())),
        }
    }
}

impl fmt::Display for RouletteBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouletteBet::Straight(n) => write!(f, "number {}", n),
            RouletteBet::Color(Color::Red) => write!(f, "red"),
            RouletteBet::Color(Color::Black) => write!(f, "black"),
            RouletteBet::Color(Color::Green) => write!(f, "green"),
            RouletteBet::Parity(Parity::Even) => write!(f, "even"),
            RouletteBet::Parity(Parity::Odd) => write!(f, "odd"),
            RouletteBet::HighLow(HighLow::High) => write!(f, "high"),
            RouletteBet::HighLow(HighLow::Low) => write!(f, "low"),
            RouletteBet::Dozen(Dozen::First) => write!(f, "first dozen"),
            RouletteBet::Dozen(Dozen::Second) => write!(f, "second dozen"),
            RouletteBet::Dozen(Dozen::Third) => write!(f, "third dozen"),
            RouletteBet::Column(Column::First) => write!(f, "column 1"),
            RouletteBet::Column(Column::Second) => write!(f, "column 2"),
            RouletteBet::Column(Column::Third) => write!(f, "column 3"),
        }
    }
}
