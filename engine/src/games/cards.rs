//! Shared playing-card helpers.
//!
//! Cards are encoded as `0..=51`, where:
//! - suit = card / 13 (0..=3)
//! - rank = card % 13 (0..=12)
//!
//! Rank 0 is Ace, which compares high (14) in poker.

use std::fmt::Write;

/// Ranks per suit.
pub(crate) const RANKS_PER_SUIT: u8 = 13;

/// Returns the 0-based rank (0..=12), where 0 is Ace.
pub(crate) fn card_rank(card: u8) -> u8 {
    card % RANKS_PER_SUIT
}

/// Returns the rank for comparisons (2..=14), where Ace is high (14).
pub(crate) fn card_rank_ace_high(card: u8) -> u8 {
    let r = card_rank(card);
    if r == 0 {
        14
    } else {
        r + 1
    }
}

/// Returns the suit (0..=3).
pub(crate) fn card_suit(card: u8) -> u8 {
    card / RANKS_PER_SUIT
}

/// Rank label ("A", "2".."10", "J", "Q", "K").
pub(crate) fn rank_label(card: u8) -> &'static str {
    const LABELS: [&str; 13] = [
        "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
    ];
    LABELS[card_rank(card) as usize]
}

/// Suit label.
pub(crate) fn suit_label(card: u8) -> &'static str {
    const LABELS: [&str; 4] = ["♠", "♥", "♦", "♣"];
    LABELS[card_suit(card) as usize]
}

/// Formats a hand as "A♠ 10♥ ...".
pub(crate) fn format_hand(cards: &[u8]) -> String {
    let mut out = String::with_capacity(cards.len() * 4);
    for (idx, &card) in cards.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}{}", rank_label(card), suit_label(card));
    }
    out
}
