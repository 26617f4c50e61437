//! Game variants and payout resolution.
//!
//! Each game is a `(validate, draw, payout, describe)` quad in its own
//! module; this module dispatches over [`BetParams`]/[`Outcome`] so the
//! orchestrator never touches game-specific logic. Payout functions are
//! pure: given a drawn outcome they return the gross win amount with no
//! side effects, which keeps every paytable unit-testable without
//! randomness.

pub(crate) mod cards;
mod blackjack;
mod dice;
mod lottery;
mod poker;
mod roulette;
mod slots;

pub use poker::{evaluate_hand, HandRank};

use crate::rng::GameRng;
use pointhouse_types::{BetParams, GameType, Outcome, ParamError};

/// Check bet parameters against the requested game, before any state is
/// read or randomness drawn.
pub fn validate_params(game: GameType, params: &BetParams) -> Result<(), ParamError> {
    if params.game_type() != game {
        return Err(ParamError::GameMismatch {
            expected: game,
            got: params.game_type(),
        });
    }
    match params {
        BetParams::Dice { guess } => dice::validate(*guess),
        BetParams::Roulette { bet } => roulette::validate(bet),
        BetParams::Lottery { numbers } => lottery::validate(numbers),
        BetParams::Slots | BetParams::Blackjack | BetParams::Poker => Ok(()),
    }
}

/// Draw one outcome from the game's outcome space.
pub fn draw_outcome(params: &BetParams, rng: &mut GameRng) -> Outcome {
    match params {
        BetParams::Dice { .. } => Outcome::Dice {
            roll: dice::draw(rng),
        },
        BetParams::Slots => Outcome::Slots {
            reels: slots::draw(rng),
        },
        BetParams::Blackjack => {
            let (player, dealer) = blackjack::draw(rng);
            Outcome::Blackjack { player, dealer }
        }
        BetParams::Roulette { .. } => Outcome::Roulette {
            pocket: roulette::draw(rng),
        },
        BetParams::Poker => {
            let (player, dealer) = poker::draw(rng);
            Outcome::Poker { player, dealer }
        }
        BetParams::Lottery { .. } => Outcome::Lottery {
            drawn: lottery::draw(rng),
        },
    }
}

/// Gross win amount for a resolved outcome. A params/outcome pairing from
/// different games resolves to no payout; the orchestrator only ever pairs
/// an outcome with the parameters it was drawn for.
pub fn resolve_payout(bet_amount: u64, params: &BetParams, outcome: &Outcome) -> u64 {
    match (params, outcome) {
        (BetParams::Dice { guess }, Outcome::Dice { roll }) => {
            dice::payout(bet_amount, *guess, *roll)
        }
        (BetParams::Slots, Outcome::Slots { reels }) => slots::payout(bet_amount, reels),
        (BetParams::Blackjack, Outcome::Blackjack { player, dealer }) => {
            blackjack::payout(bet_amount, player, dealer)
        }
        (BetParams::Roulette { bet }, Outcome::Roulette { pocket }) => {
            roulette::payout(bet_amount, bet, *pocket)
        }
        (BetParams::Poker, Outcome::Poker { player, dealer }) => {
            poker::payout(bet_amount, player, dealer)
        }
        (BetParams::Lottery { numbers }, Outcome::Lottery { drawn }) => {
            lottery::payout(numbers, drawn)
        }
        _ => 0,
    }
}

/// Human-readable outcome summary for the audit record.
pub fn describe_outcome(params: &BetParams, outcome: &Outcome) -> String {
    match (params, outcome) {
        (BetParams::Dice { guess }, Outcome::Dice { roll }) => dice::describe(*guess, *roll),
        (_, Outcome::Slots { reels }) => slots::describe(reels),
        (_, Outcome::Blackjack { player, dealer }) => blackjack::describe(player, dealer),
        (BetParams::Roulette { bet }, Outcome::Roulette { pocket }) => {
            roulette::describe(bet, *pocket)
        }
        (_, Outcome::Poker { player, dealer }) => poker::describe(player, dealer),
        (BetParams::Lottery { numbers }, Outcome::Lottery { drawn }) => {
            lottery::describe(numbers, drawn)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointhouse_types::RouletteBet;

    #[test]
    fn test_validate_params_game_mismatch() {
        let result = validate_params(GameType::Dice, &BetParams::Slots);
        assert_eq!(
            result,
            Err(ParamError::GameMismatch {
                expected: GameType::Dice,
                got: GameType::Slots,
            })
        );
    }

    #[test]
    fn test_validate_params_dispatches() {
        assert!(validate_params(GameType::Dice, &BetParams::Dice { guess: 3 }).is_ok());
        assert!(validate_params(GameType::Dice, &BetParams::Dice { guess: 9 }).is_err());
        assert!(validate_params(GameType::Slots, &BetParams::Slots).is_ok());
        assert!(validate_params(
            GameType::Roulette,
            &BetParams::Roulette {
                bet: RouletteBet::Straight(37)
            }
        )
        .is_err());
        assert!(validate_params(
            GameType::Lottery,
            &BetParams::Lottery {
                numbers: vec![1, 1, 2, 3, 4, 5]
            }
        )
        .is_err());
    }

    #[test]
    fn test_draw_outcome_matches_game() {
        let mut rng = GameRng::from_seed(7);
        for params in [
            BetParams::Dice { guess: 2 },
            BetParams::Slots,
            BetParams::Blackjack,
            BetParams::Roulette {
                bet: RouletteBet::Straight(0),
            },
            BetParams::Poker,
            BetParams::Lottery {
                numbers: vec![1, 2, 3, 4, 5, 6],
            },
        ] {
            let outcome = draw_outcome(&params, &mut rng);
            assert_eq!(outcome.game_type(), params.game_type());
        }
    }

    #[test]
    fn test_resolve_payout_dispatches() {
        // Spec goldens: dice guess=4, roll=4, bet=100 pays 500
        assert_eq!(
            resolve_payout(
                100,
                &BetParams::Dice { guess: 4 },
                &Outcome::Dice { roll: 4 }
            ),
            500
        );
        // Roulette straight hit on bet=10 pays 360
        assert_eq!(
            resolve_payout(
                10,
                &BetParams::Roulette {
                    bet: RouletteBet::Straight(17)
                },
                &Outcome::Roulette { pocket: 17 }
            ),
            360
        );
        // Lottery 4 matches pays 1000 regardless of bet size
        let params = BetParams::Lottery {
            numbers: vec![1, 2, 3, 4, 40, 41],
        };
        let outcome = Outcome::Lottery {
            drawn: [1, 2, 3, 4, 5, 6],
        };
        assert_eq!(resolve_payout(10, &params, &outcome), 1_000);
        assert_eq!(resolve_payout(500, &params, &outcome), 1_000);
    }

    #[test]
    fn test_mismatched_pairing_pays_nothing() {
        assert_eq!(
            resolve_payout(100, &BetParams::Slots, &Outcome::Dice { roll: 3 }),
            0
        );
    }
}
