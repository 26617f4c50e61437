//! Slot machine: three reels over an 8-symbol alphabet.
//!
//! Paytable (gross multipliers on the bet):
//! - three diamonds: 50x (jackpot)
//! - three sevens: 20x
//! - three stars: 15x
//! - any other triple: 10x
//! - any two matching reels: 2x
//! - no match: 0

use crate::rng::GameRng;
use pointhouse_types::Symbol;

const JACKPOT_MULTIPLIER: u64 = 50;
const SEVENS_MULTIPLIER: u64 = 20;
const STARS_MULTIPLIER: u64 = 15;
const TRIPLE_MULTIPLIER: u64 = 10;
const PAIR_MULTIPLIER: u64 = 2;

pub(crate) fn draw(rng: &mut GameRng) -> [Symbol; 3] {
    rng.spin_reels()
}

pub(crate) fn payout(bet_amount: u64, reels: &[Symbol; 3]) -> u64 {
    if reels[0] == reels[1] && reels[1] == reels[2] {
        let multiplier = match reels[0] {
            Symbol::Diamond => JACKPOT_MULTIPLIER,
            Symbol::Seven => SEVENS_MULTIPLIER,
            Symbol::Star => STARS_MULTIPLIER,
            _ => TRIPLE_MULTIPLIER,
        };
        bet_amount * multiplier
    } else if reels[0] == reels[1] || reels[1] == reels[2] || reels[0] == reels[2] {
        bet_amount * PAIR_MULTIPLIER
    } else {
        0
    }
}

pub(crate) fn describe(reels: &[Symbol; 3]) -> String {
    format!("Reels: {} {} {}", reels[0], reels[1], reels[2])
}
