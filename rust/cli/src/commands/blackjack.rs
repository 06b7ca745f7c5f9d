//! Interactive blackjack session.
//!
//! Drives a [`BlackjackTable`] from stdin: bet, then act on each hand with
//! hit/stand/double/split until the round settles. Engine rejections
//! (illegal split, short bankroll, bad bet) are printed and the prompt
//! repeats; the table state is untouched by a failed operation.

use std::io::{BufRead, Write};

use parlor_engine::cards::Card;
use parlor_engine::logger::{BlackjackRoundRecord, RoundLogger};
use parlor_engine::table::{BlackjackTable, RoundState, TableConfig};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_hand_hidden, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Handle the blackjack command: one interactive session, many rounds.
///
/// Flag values override the loaded configuration; a missing seed falls back
/// to a random one so every session shuffles differently.
#[allow(clippy::too_many_arguments)]
pub fn handle_blackjack_command(
    seed: Option<u64>,
    balance: Option<u64>,
    decks: Option<u8>,
    min_bet: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let loaded = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let table_cfg = TableConfig {
        deck_count: decks.unwrap_or(loaded.deck_count),
        min_bet: min_bet.unwrap_or(loaded.min_bet),
        starting_balance: balance.unwrap_or(loaded.starting_balance),
        stand_on_hit_21: true,
        seed: Some(seed.or(loaded.seed).unwrap_or_else(rand::random)),
    };
    if table_cfg.deck_count == 0 || table_cfg.deck_count > 8 {
        return Err(CliError::InvalidInput("decks must be 1..=8".to_string()));
    }

    let mut logger = match log {
        Some(path) => Some(RoundLogger::create(&path, "bj")?),
        None => None,
    };
    let mut table = BlackjackTable::new(table_cfg);

    writeln!(
        out,
        "Blackjack: {} deck(s), minimum bet {}. 'quit' leaves the table.",
        table_cfg.deck_count, table_cfg.min_bet
    )?;

    loop {
        if table.balance() < table_cfg.min_bet {
            writeln!(out, "Out of chips, thanks for playing.")?;
            break;
        }
        writeln!(out, "Balance: {}. Enter a bet:", table.balance())?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match line.as_str() {
            "quit" | "q" => break,
            "" => continue,
            _ => {}
        }
        let amount: u64 = match line.parse() {
            Ok(v) => v,
            Err(_) => {
                ui::write_error(err, "enter a bet amount, or 'quit'")?;
                continue;
            }
        };
        if let Err(e) = table.place_bet(amount) {
            ui::write_error(err, &e.to_string())?;
            continue;
        }
        table.deal()?;

        while table.state() == RoundState::PlayerTurn {
            let idx = table.active_hand();
            writeln!(out, "Dealer: {}", format_hand_hidden(table.dealer_hand()))?;
            writeln!(
                out,
                "Hand {} of {}: {}",
                idx + 1,
                table.hands().len(),
                format_hand(&table.hands()[idx])
            )?;
            writeln!(out, "[h]it, [s]tand, [d]ouble, s[p]lit, [q]uit")?;
            let Some(action) = read_stdin_line(stdin) else {
                return Ok(());
            };
            let result = match action.as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stand" => table.stand().map(|_| ()),
                "d" | "double" => table.double_down().map(|_| ()),
                "p" | "split" => table.split(),
                "q" | "quit" => return Ok(()),
                "" => continue,
                other => {
                    ui::write_error(err, &format!("unknown action {:?}", other))?;
                    continue;
                }
            };
            if let Err(e) = result {
                ui::write_error(err, &e.to_string())?;
            }
        }

        // Round settled: replay the dealer's draws, then pay out.
        for &card in table.dealer_draws() {
            writeln!(out, "Dealer draws {}", format_card(card))?;
        }
        writeln!(out, "Dealer: {}", format_hand(table.dealer_hand()))?;
        for (i, hand) in table.hands().iter().enumerate() {
            writeln!(out, "Hand {}: {}", i + 1, format_hand(hand))?;
        }

        let hands: Vec<Vec<Card>> = table.hands().iter().map(|h| h.cards().to_vec()).collect();
        let bets = table.bets().to_vec();
        let dealer = table.dealer_hand().cards().to_vec();
        let outcomes = table.settle_round()?;
        for outcome in &outcomes {
            writeln!(out, "{}", format_outcome(outcome))?;
        }
        if let Some(logger) = logger.as_mut() {
            let record = BlackjackRoundRecord {
                round_id: logger.next_id(),
                seed: table_cfg.seed,
                hands,
                bets,
                dealer,
                outcomes,
                balance: table.balance(),
                ts: None,
            };
            logger.write_blackjack(&record)?;
        }
    }

    writeln!(
        out,
        "Final balance: {}. Rounds won: {}.",
        table.balance(),
        table.rounds_won()
    )?;
    Ok(())
}
