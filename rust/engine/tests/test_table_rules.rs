use parlor_engine::cards::{Card, Rank as R, Suit as S};
use parlor_engine::errors::GameError;
use parlor_engine::hand::Hand;
use parlor_engine::rules::{can_double, can_split, dealer_must_draw, validate_bet, MAX_HANDS};

fn pair(a: R, b: R) -> Hand {
    Hand::from_cards(vec![Card::new(a, S::Clubs), Card::new(b, S::Hearts)])
}

#[test]
fn bet_must_meet_table_minimum() {
    assert!(validate_bet(10, 10, 1_000).is_ok());
    let err = validate_bet(5, 10, 1_000).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBet {
            amount: 5,
            minimum: 10
        }
    );
}

#[test]
fn bet_cannot_exceed_balance() {
    assert!(validate_bet(1_000, 10, 1_000).is_ok());
    assert!(matches!(
        validate_bet(1_001, 10, 1_000),
        Err(GameError::InvalidBet { .. })
    ));
}

#[test]
fn split_accepts_equal_rank_values() {
    // identical ranks
    assert!(can_split(&pair(R::Eight, R::Eight), 1, 50, 1_000).is_ok());
    // ten-value cards pair across ranks
    assert!(can_split(&pair(R::Ten, R::King), 1, 50, 1_000).is_ok());
    assert!(can_split(&pair(R::Jack, R::Queen), 1, 50, 1_000).is_ok());
    assert!(can_split(&pair(R::Ace, R::Ace), 1, 50, 1_000).is_ok());
}

#[test]
fn split_rejects_unequal_rank_values() {
    assert_eq!(
        can_split(&pair(R::Seven, R::Eight), 1, 50, 1_000).unwrap_err(),
        GameError::SplitNotAllowed
    );
    assert!(can_split(&pair(R::Ace, R::King), 1, 50, 1_000).is_err());
}

#[test]
fn split_rejects_at_hand_cap() {
    assert_eq!(
        can_split(&pair(R::Eight, R::Eight), MAX_HANDS, 50, 1_000).unwrap_err(),
        GameError::SplitNotAllowed
    );
}

#[test]
fn split_requires_matching_funds() {
    let err = can_split(&pair(R::Eight, R::Eight), 1, 50, 49).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            needed: 50,
            available: 49
        }
    );
}

#[test]
fn split_requires_exactly_two_cards() {
    let mut hand = pair(R::Eight, R::Eight);
    hand.add_card(Card::new(R::Eight, S::Spades));
    assert_eq!(
        can_split(&hand, 1, 50, 1_000).unwrap_err(),
        GameError::SplitNotAllowed
    );
}

#[test]
fn double_requires_fresh_two_card_hand() {
    assert!(can_double(&pair(R::Five, R::Six), 50, 1_000).is_ok());

    let mut worked = pair(R::Five, R::Six);
    worked.add_card(Card::new(R::Two, S::Spades));
    assert_eq!(
        can_double(&worked, 50, 1_000).unwrap_err(),
        GameError::DoubleNotAllowed
    );
}

#[test]
fn double_requires_matching_funds() {
    let err = can_double(&pair(R::Five, R::Six), 50, 49).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            needed: 50,
            available: 49
        }
    );
    // balance exactly equal to the bet is enough
    assert!(can_double(&pair(R::Five, R::Six), 50, 50).is_ok());
}

#[test]
fn dealer_draws_below_17_and_stands_on_any_17() {
    assert!(dealer_must_draw(pair(R::Six, R::Ten).value()));
    assert!(!dealer_must_draw(pair(R::Seven, R::Ten).value()));
    // soft 17 stands too
    let soft_17 = pair(R::Ace, R::Six);
    assert!(soft_17.is_soft());
    assert!(!dealer_must_draw(soft_17.value()));
    // soft 16 draws
    assert!(dealer_must_draw(pair(R::Ace, R::Five).value()));
}
