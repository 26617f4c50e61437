//! Lottery: six unique picks in 1..=49 against a six-number draw.
//!
//! Payouts are fixed point amounts keyed by match count, independent of
//! the bet (which is wagered and deducted separately):
//! 6 -> 1,000,000; 5 -> 10,000; 4 -> 1,000; 3 -> 100; 2 or fewer -> 0.

use crate::rng::GameRng;
use pointhouse_types::{ParamError, LOTTERY_PICKS, LOTTERY_POOL_SIZE};

const JACKPOT: u64 = 1_000_000;
const MATCH_FIVE: u64 = 10_000;
const MATCH_FOUR: u64 = 1_000;
const MATCH_THREE: u64 = 100;

pub(crate) fn validate(numbers: &[u8]) -> Result<(), ParamError> {
    if numbers.len() != LOTTERY_PICKS {
        return Err(ParamError::LotteryNumberCount(numbers.len()));
    }
    for &number in numbers {
        if !(1..=LOTTERY_POOL_SIZE).contains(&number) {
            return Err(ParamError::LotteryNumberOutOfRange(number));
        }
    }
    let mut seen = [false; LOTTERY_POOL_SIZE as usize + 1];
    for &number in numbers {
        if seen[number as usize] {
            return Err(ParamError::DuplicateLotteryNumber(number));
        }
        seen[number as usize] = true;
    }
    Ok(())
}

pub(crate) fn draw(rng: &mut GameRng) -> [u8; 6] {
    rng.draw_lottery()
}

fn count_matches(numbers: &[u8], drawn: &[u8; 6]) -> usize {
    numbers.iter().filter(|n| drawn.contains(n)).count()
}

pub(crate) fn payout(numbers: &[u8], drawn: &[u8; 6]) -> u64 {
    match count_matches(numbers, drawn) {
        6 => JACKPOT,
        5 => MATCH_FIVE,
        4 => MATCH_FOUR,
        3 => MATCH_THREE,
        _ => 0,
    }
}

pub(crate) fn describe(numbers: &[u8], drawn: &[u8; 6]) -> String {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    format!(
        "Numbers: {:?}, drawn: {:?}, matches: {}",
        sorted,
        drawn,
        count_matches(numbers, drawn)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_valid_picks() {
        assert!(validate(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert!(validate(&[44, 45, 46, 47, 48, 49]).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_count() {
        assert_eq!(
            validate(&[1, 2, 3, 4, 5]),
            Err(ParamError::LotteryNumberCount(5))
        );
        assert_eq!(
            validate(&[1, 2, 3, 4, 5, 6, 7]),
            Err(ParamError::LotteryNumberCount(7))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            validate(&[0, 2, 3, 4, 5, 6]),
            Err(ParamError::LotteryNumberOutOfRange(0))
        );
        assert_eq!(
            validate(&[1, 2, 3, 4, 5, 50]),
            Err(ParamError::LotteryNumberOutOfRange(50))
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        assert_eq!(
            validate(&[1, 2, 3, 4, 5, 5]),
            Err(ParamError::DuplicateLotteryNumber(5))
        );
    }

    #[test]
    fn test_payout_table() {
        let drawn = [1, 2, 3, 4, 5, 6];
        assert_eq!(payout(&[1, 2, 3, 4, 5, 6], &drawn), 1_000_000);
        assert_eq!(payout(&[1, 2, 3, 4, 5, 7], &drawn), 10_000);
        assert_eq!(payout(&[1, 2, 3, 4, 7, 8], &drawn), 1_000);
        assert_eq!(payout(&[1, 2, 3, 7, 8, 9], &drawn), 100);
        assert_eq!(payout(&[1, 2, 7, 8, 9, 10], &drawn), 0);
        assert_eq!(payout(&[1, 7, 8, 9, 10, 11], &drawn), 0);
        assert_eq!(payout(&[7, 8, 9, 10, 11, 12], &drawn), 0);
    }

    #[test]
    fn test_payout_independent_of_pick_order() {
        let drawn = [5, 12, 19, 26, 33, 40];
        assert_eq!(payout(&[40, 5, 26, 12, 33, 19], &drawn), 1_000_000);
    }

    #[test]
    fn test_describe() {
        let drawn = [1, 2, 3, 4, 5, 6];
        assert_eq!(
            describe(&[6, 5, 4, 30, 31, 32], &drawn),
            "Numbers: [4, 5, 6, 30, 31, 32], drawn: [1, 2, 3, 4, 5, 6], matches: 3"
        );
    }
}
