use parlor_engine::cards::{Card, Rank as R, Suit as S};
use parlor_engine::errors::GameError;
use parlor_engine::shoe::Shoe;
use parlor_engine::table::{BlackjackTable, OutcomeKind, RoundState, TableConfig};

fn stacked_table(cards: Vec<Card>, config: TableConfig) -> BlackjackTable {
    BlackjackTable::with_shoe(config, Shoe::stacked(cards, 0))
}

fn c(rank: R, suit: S) -> Card {
    Card::new(rank, suit)
}

#[test]
fn split_builds_two_hands_with_matching_bets() {
    let cards = vec![
        c(R::Eight, S::Clubs),  // player
        c(R::Five, S::Diamonds), // dealer
        c(R::Eight, S::Hearts), // player: the pair
        c(R::Nine, S::Diamonds), // dealer 14
        c(R::Two, S::Clubs),    // to the original hand
        c(R::Three, S::Clubs),  // to the new hand
        c(R::King, S::Diamonds), // dealer draws -> 24, bust
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();

    table.split().unwrap();
    assert_eq!(table.hands().len(), 2);
    assert_eq!(table.bets(), &[10, 10]);
    assert_eq!(table.balance(), 980);
    assert_eq!(table.active_hand(), 0);
    // one fresh card dealt to each side of the split
    assert_eq!(
        table.hands()[0].cards(),
        &[c(R::Eight, S::Clubs), c(R::Two, S::Clubs)]
    );
    assert_eq!(
        table.hands()[1].cards(),
        &[c(R::Eight, S::Hearts), c(R::Three, S::Clubs)]
    );

    assert_eq!(table.stand().unwrap(), RoundState::PlayerTurn);
    assert_eq!(table.active_hand(), 1);
    assert_eq!(table.stand().unwrap(), RoundState::Settled);

    // dealer drew to 24; both hands win even money
    assert!(table.dealer_hand().is_bust());
    let outcomes = table.settle_round().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.kind == OutcomeKind::Win));
    assert_eq!(table.balance(), 1_020);
    assert_eq!(table.rounds_won(), 1);
}

#[test]
fn ten_and_king_split_as_equal_rank_values() {
    let cards = vec![
        c(R::Ten, S::Spades),
        c(R::Ten, S::Diamonds),
        c(R::King, S::Spades),
        c(R::Seven, S::Diamonds), // dealer 17
        c(R::Four, S::Clubs),
        c(R::Five, S::Clubs),
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    table.split().unwrap();
    assert_eq!(table.hands().len(), 2);
}

#[test]
fn unequal_ranks_cannot_split() {
    let cards = vec![
        c(R::Seven, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Eight, S::Clubs),
        c(R::Seven, S::Diamonds),
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    assert_eq!(table.split().unwrap_err(), GameError::SplitNotAllowed);
    // the rejection changed nothing
    assert_eq!(table.hands().len(), 1);
    assert_eq!(table.balance(), 990);
    assert_eq!(table.state(), RoundState::PlayerTurn);
}

#[test]
fn split_without_matching_funds_is_rejected() {
    let config = TableConfig {
        starting_balance: 25,
        ..TableConfig::default()
    };
    let cards = vec![
        c(R::Nine, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Nine, S::Hearts),
        c(R::Seven, S::Diamonds),
    ];
    let mut table = stacked_table(cards, config);
    table.place_bet(20).unwrap();
    table.deal().unwrap();
    let err = table.split().unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            needed: 20,
            available: 5
        }
    );
    assert_eq!(table.hands().len(), 1);
    assert_eq!(table.balance(), 5);
}

#[test]
fn double_down_takes_exactly_one_card_and_ends_the_hand() {
    let cards = vec![
        c(R::Five, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Six, S::Clubs),
        c(R::Eight, S::Diamonds), // dealer 18, stands
        c(R::Nine, S::Clubs),     // the doubled card -> 20
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();

    let state = table.double_down().unwrap();
    assert_eq!(state, RoundState::Settled);
    let hands: Vec<Vec<Card>> = table.hands().iter().map(|h| h.cards().to_vec()).collect();
    assert_eq!(hands[0].len(), 3, "double draws exactly one card");
    assert_eq!(table.bets(), &[20]);

    let outcomes = table.settle_round().unwrap();
    assert_eq!(outcomes[0].kind, OutcomeKind::Win);
    assert_eq!(outcomes[0].net, 20);
    assert_eq!(table.balance(), 1_020);
}

#[test]
fn double_down_with_balance_equal_to_bet_is_allowed() {
    let config = TableConfig {
        starting_balance: 20,
        ..TableConfig::default()
    };
    let cards = vec![
        c(R::Five, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Six, S::Clubs),
        c(R::Eight, S::Diamonds),
        c(R::Four, S::Clubs), // doubled card -> 15, stands regardless
    ];
    let mut table = stacked_table(cards, config);
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    table.double_down().unwrap();
    assert_eq!(table.balance(), 0);
    assert_eq!(table.bets(), &[20]);
    assert!(table.hands()[0].is_finished());
}

#[test]
fn double_down_without_funds_is_rejected() {
    let config = TableConfig {
        starting_balance: 15,
        ..TableConfig::default()
    };
    let cards = vec![
        c(R::Five, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Six, S::Clubs),
        c(R::Eight, S::Diamonds),
    ];
    let mut table = stacked_table(cards, config);
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    let err = table.double_down().unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            needed: 10,
            available: 5
        }
    );
    assert_eq!(table.hands()[0].len(), 2);
    assert_eq!(table.bets(), &[10]);
    assert_eq!(table.state(), RoundState::PlayerTurn);
}

#[test]
fn double_down_after_hitting_is_rejected() {
    let cards = vec![
        c(R::Five, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Six, S::Clubs),
        c(R::Eight, S::Diamonds),
        c(R::Two, S::Clubs), // hit -> 13
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    table.hit().unwrap();
    assert_eq!(
        table.double_down().unwrap_err(),
        GameError::DoubleNotAllowed
    );
}

#[test]
fn split_hand_21_is_not_a_natural() {
    // split aces, each drawing a ten-value card: 21 both sides, paid even
    // money, not 3:2
    let cards = vec![
        c(R::Ace, S::Clubs),
        c(R::Ten, S::Diamonds),
        c(R::Ace, S::Hearts),
        c(R::Nine, S::Diamonds), // dealer 19, stands
        c(R::King, S::Clubs),    // original hand -> 21
        c(R::Queen, S::Clubs),   // new hand -> 21
    ];
    let mut table = stacked_table(cards, TableConfig::default());
    table.place_bet(10).unwrap();
    table.deal().unwrap();
    table.split().unwrap();
    assert!(table.hands().iter().all(|h| h.value() == 21));
    assert!(
        table.hands().iter().all(|h| !h.is_blackjack()),
        "post-split 21 is not a natural"
    );
    table.stand().unwrap();
    table.stand().unwrap();
    let outcomes = table.settle_round().unwrap();
    assert!(outcomes.iter().all(|o| o.net == 10), "even money, not 3:2");
}
