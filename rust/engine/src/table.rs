use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::Bankroll;
use crate::rules;
use crate::shoe::Shoe;

/// Seed used when the caller does not supply one; keeps default runs
/// reproducible.
pub const DEFAULT_SEED: u64 = 0xB1AC_4ACD;

/// Lifecycle of a blackjack round. Transitions are one-directional:
/// Betting → PlayerTurn → DealerTurn → Settled, and back to Betting only
/// through [`BlackjackTable::settle_round`]. DealerTurn is transient (the
/// dealer's draws are computed synchronously and recorded as an event list
/// for the caller to replay with its own pacing), so observers see the
/// table in Settled once the player phase ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    Betting,
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// How a single player hand fared against the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Win,
    Lose,
    Push,
}

/// Per-hand settlement record. `net` is the round profit or loss for the
/// hand: +bet for an even-money win, +3·bet/2 for a natural, −bet for a
/// loss, 0 for a push. The bankroll credit applied at settlement is
/// `bet + net` for wins and pushes (the stake was debited at placement).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub hand: usize,
    pub kind: OutcomeKind,
    pub net: i64,
}

/// Table configuration fixed at construction.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Decks in the shoe (1..=8; the site ran single-deck and six-deck
    /// variants).
    pub deck_count: u8,
    /// Smallest bet the table accepts.
    pub min_bet: u64,
    /// Chips the player sits down with.
    pub starting_balance: u64,
    /// When set, a hand hitting to exactly 21 is finished automatically;
    /// when clear, the player may keep acting on a 21. Naturals always
    /// auto-finish regardless.
    pub stand_on_hit_21: bool,
    /// Shuffle seed; [`DEFAULT_SEED`] when absent.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_count: 6,
            min_bet: 10,
            starting_balance: 1_000,
            stand_on_hit_21: true,
            seed: None,
        }
    }
}

/// A single-player blackjack table with split and double-down support.
///
/// The table is a deterministic state machine over [`RoundState`]. Every
/// operation is synchronous and atomic: it either completes, or fails with
/// a [`GameError`] leaving the table exactly as it was. The table has no
/// re-entrancy guard; a caller inserting presentation delays between
/// operations must serialize its own calls.
///
/// # Examples
///
/// ```
/// use parlor_engine::table::{BlackjackTable, RoundState, TableConfig};
///
/// let mut table = BlackjackTable::new(TableConfig::default());
/// table.place_bet(50).unwrap();
/// let state = table.deal().unwrap();
/// // A natural two-card 21 settles immediately; otherwise it is our turn.
/// assert!(matches!(state, RoundState::PlayerTurn | RoundState::Settled));
/// ```
#[derive(Debug)]
pub struct BlackjackTable {
    shoe: Shoe,
    hands: Vec<Hand>,
    bets: Vec<u64>,
    dealer: Hand,
    active: usize,
    bankroll: Bankroll,
    state: RoundState,
    config: TableConfig,
    dealer_draws: Vec<Card>,
    rounds_won: u32,
}

impl BlackjackTable {
    pub fn new(config: TableConfig) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let mut shoe = Shoe::new_with_seed(config.deck_count, seed);
        shoe.shuffle();
        Self::with_shoe(config, shoe)
    }

    /// Construct a table over an explicit shoe (stacked or pre-seeded).
    /// Used for round replay and deterministic tests.
    pub fn with_shoe(config: TableConfig, shoe: Shoe) -> Self {
        Self {
            shoe,
            hands: Vec::new(),
            bets: Vec::new(),
            dealer: Hand::new(),
            active: 0,
            bankroll: Bankroll::new(config.starting_balance),
            state: RoundState::Betting,
            config,
            dealer_draws: Vec::new(),
            rounds_won: 0,
        }
    }

    fn expect_state(&self, expected: RoundState, op: &'static str) -> Result<(), GameError> {
        if self.state != expected {
            return Err(GameError::IllegalState {
                op,
                state: self.state,
            });
        }
        Ok(())
    }

    /// Stake a bet for the opening hand. Valid only while Betting; placing
    /// a new bet before [`BlackjackTable::deal`] refunds the previous one.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidBet`] when the amount is below the table minimum
    /// or above the (refund-adjusted) balance; [`GameError::IllegalState`]
    /// outside Betting.
    pub fn place_bet(&mut self, amount: u64) -> Result<(), GameError> {
        self.expect_state(RoundState::Betting, "place_bet")?;
        let refund = self.bets.first().copied().unwrap_or(0);
        let effective = self.bankroll.balance().saturating_add(refund);
        rules::validate_bet(amount, self.config.min_bet, effective)?;
        self.bankroll.credit(refund);
        self.bets.clear();
        self.bankroll.debit(amount)?;
        self.bets.push(amount);
        Ok(())
    }

    /// Deal the opening hands: two cards to the player, two to the dealer,
    /// alternating. A natural two-card 21 is finished on the spot, it
    /// never gets a hit. If that ends the player phase the dealer
    /// plays out immediately, leaving the table Settled.
    ///
    /// # Errors
    ///
    /// [`GameError::NoBetPlaced`] without a staked bet;
    /// [`GameError::IllegalState`] outside Betting.
    pub fn deal(&mut self) -> Result<RoundState, GameError> {
        self.expect_state(RoundState::Betting, "deal")?;
        if self.bets.is_empty() {
            return Err(GameError::NoBetPlaced);
        }

        self.dealer = Hand::new();
        self.dealer_draws.clear();
        let mut hand = Hand::new();
        hand.add_card(self.shoe.draw());
        self.dealer.add_card(self.shoe.draw());
        hand.add_card(self.shoe.draw());
        self.dealer.add_card(self.shoe.draw());

        if hand.is_blackjack() {
            hand.finish();
        }
        self.hands = vec![hand];
        self.active = 0;
        self.state = RoundState::PlayerTurn;
        self.advance();
        Ok(self.state)
    }

    /// Draw one card into the active hand. Busting finishes the hand and
    /// moves on; reaching exactly 21 does the same when
    /// [`TableConfig::stand_on_hit_21`] is set. Returns the hand that
    /// received the card.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalState`] outside PlayerTurn.
    pub fn hit(&mut self) -> Result<&Hand, GameError> {
        self.expect_state(RoundState::PlayerTurn, "hit")?;
        let idx = self.active;
        let card = self.shoe.draw();
        let stand_on_21 = self.config.stand_on_hit_21;
        let hand = &mut self.hands[idx];
        hand.add_card(card);
        if hand.is_bust() || (stand_on_21 && hand.value() == 21) {
            hand.finish();
        }
        if self.hands[idx].is_finished() {
            self.advance();
        }
        Ok(&self.hands[idx])
    }

    /// Finish the active hand. While unplayed hands remain the active index
    /// moves forward (never back) and the state stays PlayerTurn; after the
    /// last hand the dealer plays out and the round is Settled.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalState`] outside PlayerTurn.
    pub fn stand(&mut self) -> Result<RoundState, GameError> {
        self.expect_state(RoundState::PlayerTurn, "stand")?;
        self.hands[self.active].finish();
        self.advance();
        Ok(self.state)
    }

    /// Double the active hand's bet in exchange for exactly one more card,
    /// then stand. Requires a fresh two-card hand and a balance covering
    /// the matching bet.
    ///
    /// # Errors
    ///
    /// [`GameError::DoubleNotAllowed`] on a worked hand,
    /// [`GameError::InsufficientFunds`] without the matching stake,
    /// [`GameError::IllegalState`] outside PlayerTurn.
    pub fn double_down(&mut self) -> Result<RoundState, GameError> {
        self.expect_state(RoundState::PlayerTurn, "double_down")?;
        let bet = self.bets[self.active];
        rules::can_double(&self.hands[self.active], bet, self.bankroll.balance())?;
        self.bankroll.debit(bet)?;
        self.bets[self.active] = bet.saturating_mul(2);
        let card = self.shoe.draw();
        let hand = &mut self.hands[self.active];
        hand.add_card(card);
        hand.finish();
        self.advance();
        Ok(self.state)
    }

    /// Split the active two-card pair into two hands with matching bets,
    /// dealing one fresh card to each. Pairs compare by rank value, so a
    /// Ten splits with a King. At most four hands per round.
    ///
    /// # Errors
    ///
    /// [`GameError::SplitNotAllowed`] on a non-pair or at the hand cap,
    /// [`GameError::InsufficientFunds`] without the matching stake,
    /// [`GameError::IllegalState`] outside PlayerTurn.
    pub fn split(&mut self) -> Result<(), GameError> {
        self.expect_state(RoundState::PlayerTurn, "split")?;
        let bet = self.bets[self.active];
        rules::can_split(
            &self.hands[self.active],
            self.hands.len(),
            bet,
            self.bankroll.balance(),
        )?;
        self.bankroll.debit(bet)?;

        let moved = self.hands[self.active]
            .pop_card()
            .ok_or(GameError::SplitNotAllowed)?;
        let mut fresh = Hand::split_child(moved);
        let first = self.shoe.draw();
        self.hands[self.active].add_card(first);
        fresh.add_card(self.shoe.draw());
        self.hands.push(fresh);
        self.bets.push(bet);
        Ok(())
    }

    /// Move the active index past finished hands; when none remain, run the
    /// dealer and mark the round Settled.
    fn advance(&mut self) {
        while self.active < self.hands.len() && self.hands[self.active].is_finished() {
            self.active += 1;
        }
        if self.active >= self.hands.len() {
            self.play_dealer();
        }
    }

    /// Dealer auto-play: hits strictly below 17, stands on any 17. Skipped
    /// entirely when every player hand busted, since those hands lose no matter
    /// what the dealer draws. Each draw is recorded for caller-paced
    /// replay.
    fn play_dealer(&mut self) {
        self.state = RoundState::DealerTurn;
        if self.hands.iter().any(|h| !h.is_bust()) {
            while rules::dealer_must_draw(self.dealer.value()) {
                let card = self.shoe.draw();
                self.dealer.add_card(card);
                self.dealer_draws.push(card);
            }
        }
        self.dealer.finish();
        self.state = RoundState::Settled;
    }

    /// Settle every hand against the dealer, credit the bankroll, and reset
    /// the table to Betting for the next round. The balance persists.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalState`] before the round reaches Settled.
    pub fn settle_round(&mut self) -> Result<Vec<Outcome>, GameError> {
        self.expect_state(RoundState::Settled, "settle_round")?;
        let mut outcomes = Vec::with_capacity(self.hands.len());
        let mut any_win = false;
        for (i, hand) in self.hands.iter().enumerate() {
            let bet = self.bets[i];
            let outcome = settle_hand(i, hand, bet, &self.dealer);
            match outcome.kind {
                OutcomeKind::Win => {
                    any_win = true;
                    self.bankroll.credit(bet.saturating_add(outcome.net as u64));
                }
                OutcomeKind::Push => self.bankroll.credit(bet),
                OutcomeKind::Lose => {}
            }
            outcomes.push(outcome);
        }
        if any_win {
            self.rounds_won += 1;
        }

        self.hands.clear();
        self.bets.clear();
        self.dealer = Hand::new();
        self.dealer_draws.clear();
        self.active = 0;
        self.state = RoundState::Betting;
        Ok(outcomes)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn balance(&self) -> u64 {
        self.bankroll.balance()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn bets(&self) -> &[u64] {
        &self.bets
    }

    /// Index of the hand currently being played. Meaningful only during
    /// PlayerTurn.
    pub fn active_hand(&self) -> usize {
        self.active
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card, once the round is dealt.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// Cards the dealer drew during auto-play, in order, for the caller to
    /// replay with its own pacing.
    pub fn dealer_draws(&self) -> &[Card] {
        &self.dealer_draws
    }

    /// Rounds in which at least one hand won.
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}

/// Settle one player hand against the dealer. Pure: both hands are read
/// as-is.
///
/// A bust loses outright. Otherwise a natural beats any non-natural dealer
/// hand (including a drawn 21) at 3:2, a dealer natural beats any
/// non-natural player hand, and remaining cases compare totals with equal
/// values pushing.
pub fn settle_hand(index: usize, hand: &Hand, bet: u64, dealer: &Hand) -> Outcome {
    let lose = Outcome {
        hand: index,
        kind: OutcomeKind::Lose,
        net: -(bet as i64),
    };
    if hand.is_bust() {
        return lose;
    }

    let win = |net: u64| Outcome {
        hand: index,
        kind: OutcomeKind::Win,
        net: net as i64,
    };
    let push = Outcome {
        hand: index,
        kind: OutcomeKind::Push,
        net: 0,
    };
    let natural_profit = bet.saturating_add(bet / 2);

    if dealer.is_bust() {
        return if hand.is_blackjack() {
            win(natural_profit)
        } else {
            win(bet)
        };
    }
    match (hand.is_blackjack(), dealer.is_blackjack()) {
        (true, false) => return win(natural_profit),
        (false, true) => return lose,
        _ => {}
    }

    let (pv, dv) = (hand.value(), dealer.value());
    if pv > dv {
        win(bet)
    } else if pv < dv {
        lose
    } else {
        push
    }
}
