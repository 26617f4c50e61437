//! Dice game: guess a face in 1..=6, exact match pays 5x the bet.

use crate::rng::GameRng;
use pointhouse_types::ParamError;

/// Gross multiplier on an exact match.
const MATCH_MULTIPLIER: u64 = 5;

pub(crate) fn validate(guess: u8) -> Result<(), ParamError> {
    if !(1..=6).contains(&guess) {
        return Err(ParamError::DiceGuessOutOfRange(guess));
    }
    Ok(())
}

pub(crate) fn draw(rng: &mut GameRng) -> u8 {
    rng.roll_die()
}

pub(crate) fn payout(bet_amount: u64, guess: u8, roll: u8) -> u64 {
    if roll == guess {
        bet_amount * MATCH_MULTIPLIER
    } else {
        0
    }
}

pub(crate) fn describe(guess: u8, roll: u8) -> String {
    format!("Rolled {}, guessed {}", roll, guess)
}
