//! Five-card draw poker against the dealer, no betting rounds.
//!
//! Both hands are ranked on the standard 8-tier ladder; only the tier is
//! compared (no kicker tiebreaks). A higher tier pays 2x, an equal tier
//! pushes (1x), a lower tier loses. Straights are ace-high only; there is
//! no wheel (A-2-3-4-5).

use super::cards;
use crate::rng::GameRng;
use std::fmt;

/// Hand tiers, weakest first so the derived ordering ranks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Rank a five-card hand.
pub fn evaluate_hand(hand: &[u8; 5]) -> HandRank {
    let mut values: [u8; 5] = [0; 5];
    for (slot, &card) in values.iter_mut().zip(hand.iter()) {
        *slot = cards::card_rank_ace_high(card);
    }
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = hand
        .iter()
        .all(|&card| cards::card_suit(card) == cards::card_suit(hand[0]));
    let is_straight = values.windows(2).all(|pair| pair[0] == pair[1] + 1);

    // Multiplicities of each rank, largest group first.
    let mut counts = [0u8; 15];
    for &value in &values {
        counts[value as usize] += 1;
    }
    let mut groups: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if is_straight && is_flush {
        HandRank::StraightFlush
    } else if groups[0] == 4 {
        HandRank::FourOfAKind
    } else if groups[0] == 3 && groups[1] == 2 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if groups[0] == 3 {
        HandRank::ThreeOfAKind
    } else if groups[0] == 2 && groups[1] == 2 {
        HandRank::TwoPair
    } else if groups[0] == 2 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    }
}

pub(crate) fn draw(rng: &mut GameRng) -> ([u8; 5], [u8; 5]) {
    rng.deal_poker()
}

pub(crate) fn payout(bet_amount: u64, player: &[u8; 5], dealer: &[u8; 5]) -> u64 {
    let player_rank = evaluate_hand(player);
    let dealer_rank = evaluate_hand(dealer);
    if player_rank > dealer_rank {
        bet_amount * 2
    } else if player_rank == dealer_rank {
        bet_amount
    } else {
        0
    }
}

pub(crate) fn describe(player: &[u8; 5], dealer: &[u8; 5]) -> String {
    format!(
        "Player: {} ({}), Dealer: {} ({})",
        cards::format_hand(player),
        evaluate_hand(player),
        cards::format_hand(dealer),
        evaluate_hand(dealer)
    )
}
