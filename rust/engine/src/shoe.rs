use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Largest shoe the table supports (casino shoes top out at eight decks).
pub const MAX_DECKS: u8 = 8;

/// A draw pool of one or more shuffled 52-card decks.
///
/// Cards are drawn positionally from the front of the shuffled order and are
/// never reused within a fill. When the pool runs dry the shoe rebuilds
/// itself from the configured deck count and reshuffles, so [`Shoe::draw`]
/// always yields a card. The shuffle is a uniform Fisher–Yates permutation
/// driven by a seeded ChaCha20 stream; the same seed reproduces the same
/// sequence of fills.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    deck_count: u8,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Build a shoe of `deck_count` decks (clamped to 1..=[`MAX_DECKS`])
    /// seeded with `seed`. The initial order is unshuffled until the first
    /// [`Shoe::shuffle`] or draw-through.
    pub fn new_with_seed(deck_count: u8, seed: u64) -> Self {
        let deck_count = deck_count.clamp(1, MAX_DECKS);
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut shoe = Self {
            cards: Vec::new(),
            position: 0,
            deck_count,
            rng,
        };
        shoe.refill();
        shoe
    }

    /// Build a shoe that deals `cards` in exactly the given order. Once the
    /// fixed cards run out the shoe refills and shuffles like a normal
    /// single-deck shoe. Used for round replay and deterministic tests.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            deck_count: 1,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn refill(&mut self) {
        self.cards.clear();
        for _ in 0..self.deck_count {
            self.cards.extend(full_deck());
        }
        self.position = 0;
    }

    pub fn shuffle(&mut self) {
        self.refill();
        self.cards.shuffle(&mut self.rng);
    }

    /// Draw the next card, rebuilding and reshuffling the shoe first if it
    /// is exhausted.
    pub fn draw(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.shuffle();
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }
}
