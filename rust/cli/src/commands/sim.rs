//! Batch simulation of either game, with optional JSONL round records.
//!
//! The blackjack player mimics the dealer rule (hit below 17); the
//! roshambo player leans on one throw often enough for the frequency
//! predictor to have something to chew on. Output files ending in `.zst`
//! are Zstandard-compressed transparently.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use parlor_ai::create_opponent;
use parlor_engine::logger::{
    format_round_id, BlackjackRoundRecord, RoshamboRoundRecord,
};
use parlor_engine::roshambo::{Move, RoshamboConfig, RoshamboGame, MOVES};
use parlor_engine::table::{BlackjackTable, OutcomeKind, RoundState, TableConfig};

use crate::cli::GameKind;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Handle the sim command: run `rounds` rounds of the chosen game.
pub fn handle_sim_command(
    game: GameKind,
    rounds: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let loaded = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(loaded.seed).unwrap_or_else(rand::random);

    let mut writer = match &output {
        Some(path) => Some(open_record_writer(Path::new(path))?),
        None => None,
    };

    match game {
        GameKind::Blackjack => sim_blackjack(rounds, seed, &loaded, &mut writer, out)?,
        GameKind::Roshambo => sim_roshambo(rounds, seed, &loaded, &mut writer, out)?,
    }

    if let Some(w) = writer.as_mut() {
        w.flush()?;
    }
    if let Some(path) = &output {
        writeln!(out, "Records written to {}", path)?;
    }
    Ok(())
}

/// JSONL writer for the output path, Zstandard-compressed when the path
/// ends in `.zst`.
fn open_record_writer(path: &Path) -> Result<Box<dyn Write>, CliError> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    if path.extension().is_some_and(|ext| ext == "zst") {
        Ok(Box::new(
            zstd::stream::write::Encoder::new(file, 0)?.auto_finish(),
        ))
    } else {
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn write_record<T: serde::Serialize>(
    writer: &mut Option<Box<dyn Write>>,
    record: &T,
) -> Result<(), CliError> {
    if let Some(w) = writer.as_mut() {
        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

fn sim_blackjack(
    rounds: u32,
    seed: u64,
    cfg: &Config,
    writer: &mut Option<Box<dyn Write>>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let table_cfg = TableConfig {
        deck_count: cfg.deck_count,
        min_bet: cfg.min_bet,
        starting_balance: cfg.starting_balance,
        stand_on_hit_21: true,
        seed: Some(seed),
    };
    let mut table = BlackjackTable::new(table_cfg);
    let mut played = 0u32;
    let (mut won, mut lost, mut pushed) = (0u64, 0u64, 0u64);

    for round in 0..rounds {
        if table.balance() < table_cfg.min_bet {
            writeln!(out, "Bankroll exhausted after {} rounds.", round)?;
            break;
        }
        table.place_bet(table_cfg.min_bet)?;
        table.deal()?;
        while table.state() == RoundState::PlayerTurn {
            if table.hands()[table.active_hand()].value() < 17 {
                table.hit()?;
            } else {
                table.stand()?;
            }
        }

        let hands = table
            .hands()
            .iter()
            .map(|h| h.cards().to_vec())
            .collect();
        let bets = table.bets().to_vec();
        let dealer = table.dealer_hand().cards().to_vec();
        let outcomes = table.settle_round()?;
        for outcome in &outcomes {
            match outcome.kind {
                OutcomeKind::Win => won += 1,
                OutcomeKind::Lose => lost += 1,
                OutcomeKind::Push => pushed += 1,
            }
        }
        write_record(
            writer,
            &BlackjackRoundRecord {
                round_id: format_round_id("sim", round + 1),
                seed: Some(seed),
                hands,
                bets,
                dealer,
                outcomes,
                balance: table.balance(),
                ts: Some(now_rfc3339()),
            },
        )?;
        played += 1;
    }

    writeln!(
        out,
        "Simulated {} blackjack round(s): {} hand(s) won / {} lost / {} pushed, final balance {}.",
        played,
        won,
        lost,
        pushed,
        table.balance()
    )?;
    Ok(())
}

fn sim_roshambo(
    rounds: u32,
    seed: u64,
    cfg: &Config,
    writer: &mut Option<Box<dyn Write>>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let policy = create_opponent("frequency", cfg.ai_edge, Some(seed));
    let mut game = RoshamboGame::new(RoshamboConfig { window: cfg.window }, policy);
    // The simulated player favors rock without being fully predictable.
    let mut player_rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5EED);

    for round in 0..rounds {
        let mv = if player_rng.random::<f64>() < 0.6 {
            Move::Rock
        } else {
            MOVES[player_rng.random_range(0..MOVES.len())]
        };
        let result = game.play_round(mv);
        write_record(
            writer,
            &RoshamboRoundRecord {
                round_id: format_round_id("sim", round + 1),
                player: result.player,
                opponent: result.opponent,
                winner: result.winner,
                ts: Some(now_rfc3339()),
            },
        )?;
    }

    let scores = game.scores();
    writeln!(
        out,
        "Simulated {} roshambo round(s): player {} / house {} / ties {}.",
        rounds, scores.player, scores.house, scores.ties
    )?;
    Ok(())
}
