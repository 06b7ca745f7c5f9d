//! Interactive rock-paper-scissors session against a chosen policy.

use std::io::{BufRead, Write};
use std::str::FromStr;

use parlor_ai::create_opponent;
use parlor_engine::errors::GameError;
use parlor_engine::roshambo::{Move, RoshamboConfig, RoshamboGame};

use crate::cli::OpponentKind;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_winner;
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Accept the full move names plus single-letter shortcuts.
fn parse_move(s: &str) -> Result<Move, GameError> {
    match s {
        "r" => Ok(Move::Rock),
        "p" => Ok(Move::Paper),
        "s" => Ok(Move::Scissors),
        other => Move::from_str(other),
    }
}

/// Handle the roshambo command: rounds until 'quit' or EOF.
pub fn handle_roshambo_command(
    seed: Option<u64>,
    window: Option<usize>,
    edge: Option<f64>,
    opponent: OpponentKind,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let loaded = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let window = window.unwrap_or(loaded.window);
    let edge = edge.unwrap_or(loaded.ai_edge);
    if window == 0 {
        return Err(CliError::InvalidInput("window must be >= 1".to_string()));
    }
    if !edge.is_finite() || !(0.0..=1.0).contains(&edge) {
        return Err(CliError::InvalidInput(
            "edge must be within 0.0..=1.0".to_string(),
        ));
    }
    let seed = Some(seed.or(loaded.seed).unwrap_or_else(rand::random));

    let policy = create_opponent(opponent.as_str(), edge, seed);
    let mut game = RoshamboGame::new(RoshamboConfig { window }, policy);

    writeln!(
        out,
        "Rock-paper-scissors vs the {} opponent. Throw rock/paper/scissors (r/p/s); 'reset' clears the score, 'quit' ends.",
        game.opponent_name()
    )?;

    while let Some(line) = read_stdin_line(stdin) {
        match line.as_str() {
            "quit" | "q" => break,
            "reset" => {
                game.reset();
                writeln!(out, "Score and history cleared.")?;
            }
            "" => continue,
            other => match parse_move(other) {
                Ok(mv) => {
                    let result = game.play_round(mv);
                    let scores = game.scores();
                    writeln!(
                        out,
                        "You threw {}, house threw {}: {}.",
                        result.player.as_str(),
                        result.opponent.as_str(),
                        format_winner(result.winner)
                    )?;
                    writeln!(
                        out,
                        "Score: you {} / house {} / ties {}",
                        scores.player, scores.house, scores.ties
                    )?;
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }

    let scores = game.scores();
    writeln!(
        out,
        "Final score after {} rounds: you {} / house {} / ties {}.",
        scores.total(),
        scores.player,
        scores.house,
        scores.ties
    )?;
    Ok(())
}
