use crate::errors::GameError;
use crate::hand::Hand;

/// Table maximum number of player hands after splits.
pub const MAX_HANDS: usize = 4;

/// Validates a bet against the table minimum and the available balance.
///
/// # Errors
///
/// Returns [`GameError::InvalidBet`] when the amount is below the minimum
/// or exceeds the balance.
///
/// # Examples
///
/// ```
/// use parlor_engine::rules::validate_bet;
///
/// assert!(validate_bet(50, 10, 1_000).is_ok());
/// assert!(validate_bet(5, 10, 1_000).is_err());
/// assert!(validate_bet(2_000, 10, 1_000).is_err());
/// ```
pub fn validate_bet(amount: u64, minimum: u64, balance: u64) -> Result<(), GameError> {
    if amount < minimum || amount > balance {
        return Err(GameError::InvalidBet { amount, minimum });
    }
    Ok(())
}

/// Checks whether the active hand may double down: exactly two cards, not
/// yet finished, and enough balance to match the existing bet.
///
/// # Errors
///
/// [`GameError::DoubleNotAllowed`] for a worked or finished hand,
/// [`GameError::InsufficientFunds`] when the balance cannot cover the
/// matching bet.
pub fn can_double(hand: &Hand, bet: u64, balance: u64) -> Result<(), GameError> {
    if hand.len() != 2 || hand.is_finished() {
        return Err(GameError::DoubleNotAllowed);
    }
    if balance < bet {
        return Err(GameError::InsufficientFunds {
            needed: bet,
            available: balance,
        });
    }
    Ok(())
}

/// Checks whether the active hand may split: a two-card pair by rank
/// *value* (a Ten splits with a King), fewer than [`MAX_HANDS`] hands, and
/// enough balance for the matching bet.
///
/// # Errors
///
/// [`GameError::SplitNotAllowed`] on a non-pair or at the hand cap,
/// [`GameError::InsufficientFunds`] when the balance cannot cover the
/// matching bet.
///
/// # Examples
///
/// ```
/// use parlor_engine::cards::{Card, Rank, Suit};
/// use parlor_engine::hand::Hand;
/// use parlor_engine::rules::can_split;
///
/// let pair = Hand::from_cards(vec![
///     Card::new(Rank::Ten, Suit::Clubs),
///     Card::new(Rank::King, Suit::Hearts),
/// ]);
/// assert!(can_split(&pair, 1, 50, 1_000).is_ok());
///
/// let off = Hand::from_cards(vec![
///     Card::new(Rank::Seven, Suit::Clubs),
///     Card::new(Rank::Eight, Suit::Hearts),
/// ]);
/// assert!(can_split(&off, 1, 50, 1_000).is_err());
/// ```
pub fn can_split(
    hand: &Hand,
    hand_count: usize,
    bet: u64,
    balance: u64,
) -> Result<(), GameError> {
    if hand_count >= MAX_HANDS {
        return Err(GameError::SplitNotAllowed);
    }
    let cards = hand.cards();
    if hand.is_finished()
        || cards.len() != 2
        || cards[0].rank.base_value() != cards[1].rank.base_value()
    {
        return Err(GameError::SplitNotAllowed);
    }
    if balance < bet {
        return Err(GameError::InsufficientFunds {
            needed: bet,
            available: balance,
        });
    }
    Ok(())
}

/// House drawing rule: the dealer hits strictly below 17 and stands on any
/// 17, soft or hard.
pub fn dealer_must_draw(value: u32) -> bool {
    value < 17
}
