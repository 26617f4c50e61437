//! Roulette: single wheel spin over pockets 0..=36, zero is green.
//!
//! Gross multipliers on a winning bet:
//! - straight number (and green): 36x
//! - red/black/even/odd/high/low: 2x
//! - dozen/column: 3x
//!
//! Zero pays only a straight bet on 0 or a green color bet; every other
//! bet loses when the ball lands on zero.

use crate::rng::GameRng;
use pointhouse_types::{Color, Column, Dozen, HighLow, ParamError, Parity, RouletteBet};

/// Red pockets on a standard wheel.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

const STRAIGHT_MULTIPLIER: u64 = 36;
const EVEN_MONEY_MULTIPLIER: u64 = 2;
const TWO_TO_ONE_MULTIPLIER: u64 = 3;

pub(crate) fn validate(bet: &RouletteBet) -> Result<(), ParamError> {
    if let RouletteBet::Straight(number) = bet {
        if *number > 36 {
            return Err(ParamError::RouletteNumberOutOfRange(*number));
        }
    }
    Ok(())
}

pub(crate) fn draw(rng: &mut GameRng) -> u8 {
    rng.spin_roulette()
}

fn is_red(pocket: u8) -> bool {
    RED_NUMBERS.contains(&pocket)
}

/// Whether a bet covers the drawn pocket.
fn bet_wins(bet: &RouletteBet, pocket: u8) -> bool {
    // Zero loses everything except a straight bet on 0 or green
    if pocket == 0 {
        return matches!(
            bet,
            RouletteBet::Straight(0) | RouletteBet::Color(Color::Green)
        );
    }

    match bet {
        RouletteBet::Straight(number) => *number == pocket,
        RouletteBet::Color(Color::Red) => is_red(pocket),
        RouletteBet::Color(Color::Black) => !is_red(pocket),
        RouletteBet::Color(Color::Green) => false,
        RouletteBet::Parity(Parity::Even) => pocket % 2 == 0,
        RouletteBet::Parity(Parity::Odd) => pocket % 2 == 1,
        RouletteBet::HighLow(HighLow::High) => pocket >= 19,
        RouletteBet::HighLow(HighLow::Low) => pocket <= 18,
        RouletteBet::Dozen(dozen) => {
            let hit = (pocket - 1) / 12;
            let target = match dozen {
                Dozen::First => 0,
                Dozen::Second => 1,
                Dozen::Third => 2,
            };
            hit == target
        }
        RouletteBet::Column(column) => {
            let hit = (pocket - 1) % 3;
            let target = match column {
                Column::First => 0,
                Column::Second => 1,
                Column::Third => 2,
            };
            hit == target
        }
    }
}

/// Gross payout multiplier for a winning bet.
fn payout_multiplier(bet: &RouletteBet) -> u64 {
    match bet {
        RouletteBet::Straight(_) | RouletteBet::Color(Color::Green) => STRAIGHT_MULTIPLIER,
        RouletteBet::Color(_) | RouletteBet::Parity(_) | RouletteBet::HighLow(_) => {
            EVEN_MONEY_MULTIPLIER
        }
        RouletteBet::Dozen(_) | RouletteBet::Column(_) => TWO_TO_ONE_MULTIPLIER,
    }
}

pub(crate) fn payout(bet_amount: u64, bet: &RouletteBet, pocket: u8) -> u64 {
    if bet_wins(bet, pocket) {
        bet_amount * payout_multiplier(bet)
    } else {
        0
    }
}

pub(crate) fn describe(bet: &RouletteBet, pocket: u8) -> String {
    format!("Bet {}, winning number {}", bet, pocket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_straight_range() {
        assert!(validate(&RouletteBet::Straight(0)).is_ok());
        assert!(validate(&RouletteBet::Straight(36)).is_ok());
        assert_eq!(
            validate(&RouletteBet::Straight(37)),
            Err(ParamError::RouletteNumberOutOfRange(37))
        );
    }

    #[test]
    fn test_is_red() {
        assert!(is_red(1));
        assert!(is_red(32));
        assert!(!is_red(2));
        assert!(!is_red(0));
    }

    #[test]
    fn test_straight_bet() {
        assert!(bet_wins(&RouletteBet::Straight(17), 17));
        assert!(!bet_wins(&RouletteBet::Straight(17), 18));
        assert!(bet_wins(&RouletteBet::Straight(0), 0));
        assert!(!bet_wins(&RouletteBet::Straight(1), 0));
    }

    #[test]
    fn test_colors() {
        assert!(bet_wins(&RouletteBet::Color(Color::Red), 1));
        assert!(!bet_wins(&RouletteBet::Color(Color::Red), 2));
        assert!(bet_wins(&RouletteBet::Color(Color::Black), 2));
        assert!(!bet_wins(&RouletteBet::Color(Color::Black), 1));
        // Zero is green, not red or black
        assert!(!bet_wins(&RouletteBet::Color(Color::Red), 0));
        assert!(!bet_wins(&RouletteBet::Color(Color::Black), 0));
        assert!(bet_wins(&RouletteBet::Color(Color::Green), 0));
        assert!(!bet_wins(&RouletteBet::Color(Color::Green), 14));
    }

    #[test]
    fn test_even_odd_zero_loses() {
        assert!(bet_wins(&RouletteBet::Parity(Parity::Even), 2));
        assert!(bet_wins(&RouletteBet::Parity(Parity::Odd), 35));
        assert!(!bet_wins(&RouletteBet::Parity(Parity::Even), 0));
        assert!(!bet_wins(&RouletteBet::Parity(Parity::Odd), 0));
    }

    #[test]
    fn test_high_low() {
        assert!(bet_wins(&RouletteBet::HighLow(HighLow::Low), 1));
        assert!(bet_wins(&RouletteBet::HighLow(HighLow::Low), 18));
        assert!(!bet_wins(&RouletteBet::HighLow(HighLow::Low), 19));
        assert!(!bet_wins(&RouletteBet::HighLow(HighLow::Low), 0));
        assert!(bet_wins(&RouletteBet::HighLow(HighLow::High), 19));
        assert!(bet_wins(&RouletteBet::HighLow(HighLow::High), 36));
        assert!(!bet_wins(&RouletteBet::HighLow(HighLow::High), 18));
    }

    #[test]
    fn test_dozens() {
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::First), 1));
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::First), 12));
        assert!(!bet_wins(&RouletteBet::Dozen(Dozen::First), 13));
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::Second), 13));
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::Second), 24));
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::Third), 25));
        assert!(bet_wins(&RouletteBet::Dozen(Dozen::Third), 36));
        assert!(!bet_wins(&RouletteBet::Dozen(Dozen::Third), 24));
    }

    #[test]
    fn test_columns() {
        // First column: 1, 4, 7, ... 34
        assert!(bet_wins(&RouletteBet::Column(Column::First), 1));
        assert!(bet_wins(&RouletteBet::Column(Column::First), 34));
        assert!(!bet_wins(&RouletteBet::Column(Column::First), 2));
        // Second column: 2, 5, 8, ... 35
        assert!(bet_wins(&RouletteBet::Column(Column::Second), 2));
        assert!(bet_wins(&RouletteBet::Column(Column::Second), 35));
        // Third column: 3, 6, 9, ... 36
        assert!(bet_wins(&RouletteBet::Column(Column::Third), 3));
        assert!(bet_wins(&RouletteBet::Column(Column::Third), 36));
        assert!(!bet_wins(&RouletteBet::Column(Column::Third), 1));
    }

    #[test]
    fn test_payout_amounts() {
        // Straight number hit on bet=10 returns 360
        assert_eq!(payout(10, &RouletteBet::Straight(17), 17), 360);
        assert_eq!(payout(10, &RouletteBet::Straight(17), 16), 0);
        assert_eq!(payout(10, &RouletteBet::Color(Color::Red), 1), 20);
        assert_eq!(payout(10, &RouletteBet::Color(Color::Green), 0), 360);
        assert_eq!(payout(10, &RouletteBet::Dozen(Dozen::First), 5), 30);
        assert_eq!(payout(10, &RouletteBet::Column(Column::Second), 5), 30);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&RouletteBet::Straight(17), 4),
            "Bet number 17, winning number 4"
        );
        assert_eq!(
            describe(&RouletteBet::Dozen(Dozen::Second), 14),
            "Bet second dozen, winning number 14"
        );
    }
}
