use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Compute the blackjack value of a card sequence and whether the total is
/// soft (an ace still counting as 11). Aces start at 11 and are demoted to 1
/// one at a time while the total exceeds 21.
pub fn hand_value(cards: &[Card]) -> (u32, bool) {
    let mut total: u32 = 0;
    let mut aces: u32 = 0;
    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total += card.rank.base_value();
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    (total, aces > 0 && total <= 21)
}

/// A set of cards held by one party, player or dealer.
///
/// The point value and the bust/blackjack flags are derived from the cards
/// on every query rather than cached, so they can never drift out of sync
/// with the card list. The only stored flags are `finished` (this hand's
/// turn is over) and `from_split` (the hand was created by splitting a
/// pair, which disqualifies a two-card 21 from counting as a natural).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    finished: bool,
    from_split: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            finished: false,
            from_split: false,
        }
    }

    /// A fresh hand seeded with one card moved out of a split pair.
    pub(crate) fn split_child(card: Card) -> Self {
        Self {
            cards: vec![card],
            finished: false,
            from_split: true,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the most recently added card. Only the split
    /// operation does this, to move the second card of a pair into a new
    /// hand.
    pub(crate) fn pop_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if card.is_some() {
            self.from_split = true;
        }
        card
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards).0
    }

    /// Whether an ace is still counting as 11 in the current total.
    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// A natural: exactly two cards totalling 21, dealt at the start of a
    /// round. Hands produced by a split never qualify, nor does a 21
    /// reached by hitting.
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && self.cards.len() == 2 && self.value() == 21
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }
}
