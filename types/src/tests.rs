use super::*;
use chrono::Utc;

#[test]
fn test_bet_params_game_type() {
    assert_eq!(BetParams::Dice { guess: 3 }.game_type(), GameType::Dice);
    assert_eq!(BetParams::Slots.game_type(), GameType::Slots);
    assert_eq!(BetParams::Blackjack.game_type(), GameType::Blackjack);
    assert_eq!(
        BetParams::Roulette {
            bet: RouletteBet::Straight(17)
        }
        .game_type(),
        GameType::Roulette
    );
    assert_eq!(BetParams::Poker.game_type(), GameType::Poker);
    assert_eq!(
        BetParams::Lottery {
            numbers: vec![1, 2, 3, 4, 5, 6]
        }
        .game_type(),
        GameType::Lottery
    );
}

#[test]
fn test_roulette_bet_from_labels() {
    assert_eq!(
        RouletteBet::from_labels("number", "17").unwrap(),
        RouletteBet::Straight(17)
    );
    assert_eq!(
        RouletteBet::from_labels("number", "0").unwrap(),
        RouletteBet::Straight(0)
    );
    assert_eq!(
        RouletteBet::from_labels("color", "red").unwrap(),
        RouletteBet::Color(Color::Red)
    );
    assert_eq!(
        RouletteBet::from_labels("color", "green").unwrap(),
        RouletteBet::Color(Color::Green)
    );
    assert_eq!(
        RouletteBet::from_labels("even_odd", "odd").unwrap(),
        RouletteBet::Parity(Parity::Odd)
    );
    assert_eq!(
        RouletteBet::from_labels("high_low", "low").unwrap(),
        RouletteBet::HighLow(HighLow::Low)
    );
    assert_eq!(
        RouletteBet::from_labels("dozen", "second").unwrap(),
        RouletteBet::Dozen(Dozen::Second)
    );
    assert_eq!(
        RouletteBet::from_labels("column", "3").unwrap(),
        RouletteBet::Column(Column::Third)
    );
}

#[test]
fn test_roulette_bet_from_labels_rejects_malformed() {
    assert_eq!(
        RouletteBet::from_labels("corner", "17"),
        Err(ParamError::UnknownRouletteBetType("corner".to_string()))
    );
    assert_eq!(
        RouletteBet::from_labels("number", "37"),
        Err(ParamError::RouletteNumberOutOfRange(37))
    );
    assert!(matches!(
        RouletteBet::from_labels("number", "seventeen"),
        Err(ParamError::InvalidRouletteBetValue { .. })
    ));
    assert!(matches!(
        RouletteBet::from_labels("color", "blue"),
        Err(ParamError::InvalidRouletteBetValue { .. })
    ));
    assert!(matches!(
        RouletteBet::from_labels("dozen", "fourth"),
        Err(ParamError::InvalidRouletteBetValue { .. })
    ));
}

#[test]
fn test_game_type_labels() {
    for game in GameType::ALL {
        // Serde uses the same lowercase labels as as_str()
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, format!("\"{}\"", game.as_str()));
    }
}

#[test]
fn test_game_record_serde_roundtrip() {
    let record = GameRecord::new(
        UserId::from("alice"),
        GameType::Dice,
        100,
        500,
        "Rolled 3, guessed 3".to_string(),
        Utc::now(),
    );
    let json = serde_json::to_string(&record).unwrap();
    let decoded: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, decoded);
}

#[test]
fn test_account_defaults() {
    let account = UserAccount::new("alice", STARTING_BALANCE);
    assert_eq!(account.points_balance, 1_000);
    assert_eq!(account.total_earned, 0);
    assert!(account.is_active());

    let banned = UserAccount {
        status: AccountStatus::Banned,
        ..account
    };
    assert!(!banned.is_active());
}
