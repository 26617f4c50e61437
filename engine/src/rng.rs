//! Random outcome generation.
//!
//! [`GameRng`] is the engine's only randomness source: one draw method per
//! game, each returning an unbiased sample of that game's outcome space.
//! This is entertainment randomness, not security randomness; a seedable
//! ChaCha stream keeps tests and replays deterministic.

use pointhouse_types::{Symbol, LOTTERY_PICKS, LOTTERY_POOL_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Cards in a standard deck.
const DECK_SIZE: u8 = 52;

/// Uniform randomness for game outcomes.
pub struct GameRng {
    inner: ChaCha12Rng,
}

impl GameRng {
    /// An RNG seeded from OS entropy (production path).
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha12Rng::from_entropy(),
        }
    }

    /// A deterministic RNG for tests and replay.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// One die face in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Three independent reel symbols.
    pub fn spin_reels(&mut self) -> [Symbol; 3] {
        let mut reels = [Symbol::Cherry; 3];
        for reel in reels.iter_mut() {
            *reel = Symbol::ALL[self.inner.gen_range(0..Symbol::ALL.len())];
        }
        reels
    }

    /// Two flattened blackjack card values in `1..=11`.
    pub fn blackjack_hand(&mut self) -> [u8; 2] {
        [self.inner.gen_range(1..=11), self.inner.gen_range(1..=11)]
    }

    /// One roulette pocket in `0..=36`.
    pub fn spin_roulette(&mut self) -> u8 {
        self.inner.gen_range(0..=36)
    }

    /// Ten cards without replacement from a 52-card deck: first five to the
    /// player, next five to the dealer.
    pub fn deal_poker(&mut self) -> ([u8; 5], [u8; 5]) {
        let mut deck: Vec<u8> = (0..DECK_SIZE).collect();
        deck.shuffle(&mut self.inner);
        let mut player = [0u8; 5];
        let mut dealer = [0u8; 5];
        player.copy_from_slice(&deck[..5]);
        dealer.copy_from_slice(&deck[5..10]);
        (player, dealer)
    }

    /// Six unique lottery numbers in `1..=49`, sorted ascending.
    pub fn draw_lottery(&mut self) -> [u8; 6] {
        let mut pool: Vec<u8> = (1..=LOTTERY_POOL_SIZE).collect();
        pool.shuffle(&mut self.inner);
        let mut drawn = [0u8; 6];
        drawn.copy_from_slice(&pool[..LOTTERY_PICKS]);
        drawn.sort_unstable();
        drawn
    }
}
