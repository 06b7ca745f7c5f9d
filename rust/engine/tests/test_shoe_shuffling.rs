use std::collections::HashMap;

use parlor_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use parlor_engine::shoe::Shoe;

#[test]
fn six_deck_shoe_holds_312_cards() {
    let mut shoe = Shoe::new_with_seed(6, 42);
    shoe.shuffle();
    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.deck_count(), 6);
}

#[test]
fn every_card_appears_deck_count_times() {
    let mut shoe = Shoe::new_with_seed(2, 7);
    shoe.shuffle();
    let mut counts: HashMap<Card, u32> = HashMap::new();
    for _ in 0..104 {
        *counts.entry(shoe.draw()).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 52, "all 52 distinct cards present");
    assert!(
        counts.values().all(|&n| n == 2),
        "each card exactly twice in a two-deck shoe"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut a = Shoe::new_with_seed(1, 12345);
    let mut b = Shoe::new_with_seed(1, 12345);
    a.shuffle();
    b.shuffle();
    let first: Vec<Card> = (0..10).map(|_| a.draw()).collect();
    let second: Vec<Card> = (0..10).map(|_| b.draw()).collect();
    assert_eq!(first, second, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut a = Shoe::new_with_seed(1, 1);
    let mut b = Shoe::new_with_seed(1, 2);
    a.shuffle();
    b.shuffle();
    let first: Vec<Card> = (0..10).map(|_| a.draw()).collect();
    let second: Vec<Card> = (0..10).map(|_| b.draw()).collect();
    assert_ne!(
        first, second,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn exhausted_shoe_refills_and_reshuffles() {
    let mut shoe = Shoe::new_with_seed(1, 99);
    shoe.shuffle();
    for _ in 0..52 {
        shoe.draw();
    }
    assert_eq!(shoe.remaining(), 0);
    // next draw must transparently rebuild the pool
    let _ = shoe.draw();
    assert_eq!(shoe.remaining(), 51);
}

#[test]
fn deck_count_is_clamped_to_supported_range() {
    let shoe = Shoe::new_with_seed(0, 3);
    assert_eq!(shoe.deck_count(), 1);
    let shoe = Shoe::new_with_seed(40, 3);
    assert_eq!(shoe.deck_count(), 8);
}

#[test]
fn stacked_shoe_deals_in_given_order() {
    let cards = vec![
        Card::new(R::Ace, S::Spades),
        Card::new(R::King, S::Hearts),
        Card::new(R::Two, S::Clubs),
    ];
    let mut shoe = Shoe::stacked(cards.clone(), 0);
    assert_eq!(shoe.remaining(), 3);
    for &expected in &cards {
        assert_eq!(shoe.draw(), expected);
    }
    // past the stacked cards it behaves like a normal shoe
    let _ = shoe.draw();
    assert_eq!(shoe.remaining(), 51);
}

#[test]
fn full_deck_is_52_unique_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    let mut counts: HashMap<Card, u32> = HashMap::new();
    for c in deck {
        *counts.entry(c).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 52);
}
