//! Terminal rendering for cards, hands, and round results.

use parlor_engine::cards::{Card, Rank, Suit};
use parlor_engine::hand::Hand;
use parlor_engine::roshambo::Winner;
use parlor_engine::table::{Outcome, OutcomeKind};

pub fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Clubs => '♣',
        Suit::Diamonds => '♦',
        Suit::Hearts => '♥',
        Suit::Spades => '♠',
    }
}

pub fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
}

pub fn format_card(card: Card) -> String {
    format!("{}{}", rank_label(card.rank), suit_symbol(card.suit))
}

/// Render a hand as its cards plus the current value, e.g. `A♠ K♥ (21)`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(|&c| format_card(c)).collect();
    format!("{} ({})", cards.join(" "), hand.value())
}

/// Render a hand with the hole card hidden, the way the table looks during
/// the player's turn.
pub fn format_hand_hidden(hand: &Hand) -> String {
    match hand.cards().first() {
        Some(&up) => format!("{} ??", format_card(up)),
        None => String::new(),
    }
}

pub fn format_outcome(outcome: &Outcome) -> String {
    let verdict = match outcome.kind {
        OutcomeKind::Win => "wins",
        OutcomeKind::Lose => "loses",
        OutcomeKind::Push => "pushes",
    };
    format!(
        "Hand {} {} ({}{})",
        outcome.hand + 1,
        verdict,
        if outcome.net >= 0 { "+" } else { "" },
        outcome.net
    )
}

pub fn format_winner(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "you win",
        Winner::House => "house wins",
        Winner::Tie => "tie",
    }
}
