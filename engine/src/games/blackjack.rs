//! Simplified blackjack: two flattened card values (1..=11) per hand, no
//! hit/stand round.
//!
//! Resolution order matters: a player 21 beats everything except a dealer
//! 21 (push), a player bust loses even when the dealer also busts.
//!
//! Payouts (gross):
//! - player 21, dealer not 21: floor(2.5x)
//! - player bust: 0
//! - dealer bust (player standing): 2x
//! - higher total: 2x, lower total: 0
//! - tie: 1x (push)

use crate::rng::GameRng;

fn score(hand: &[u8; 2]) -> u8 {
    hand[0] + hand[1]
}

pub(crate) fn draw(rng: &mut GameRng) -> ([u8; 2], [u8; 2]) {
    let player = rng.blackjack_hand();
    let dealer = rng.blackjack_hand();
    (player, dealer)
}

pub(crate) fn payout(bet_amount: u64, player: &[u8; 2], dealer: &[u8; 2]) -> u64 {
    let player_score = score(player);
    let dealer_score = score(dealer);

    if player_score == 21 && dealer_score != 21 {
        // 2.5x, floored to an integer
        bet_amount * 5 / 2
    } else if player_score > 21 {
        0
    } else if dealer_score > 21 {
        bet_amount * 2
    } else if player_score > dealer_score {
        bet_amount * 2
    } else if player_score < dealer_score {
        0
    } else {
        bet_amount
    }
}

pub(crate) fn describe(player: &[u8; 2], dealer: &[u8; 2]) -> String {
    format!(
        "Player [{}, {}] ({}) vs Dealer [{}, {}] ({})",
        player[0],
        player[1],
        score(player),
        dealer[0],
        dealer[1],
        score(dealer)
    )
}
