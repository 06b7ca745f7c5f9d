//! # Parlor CLI Library
//!
//! Command-line interface for the parlor game engines: interactive
//! blackjack and rock-paper-scissors sessions, batch simulation with JSONL
//! round records, and configuration inspection. The CLI is presentation
//! glue only: every rule lives in `parlor-engine` and every opponent
//! policy in `parlor-ai`.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments, executes the appropriate subcommand against the
//! provided output streams, and returns a process exit code.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["parlor", "sim", "--game", "roshambo", "--rounds", "50"];
//! let code = parlor_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `blackjack`: Play blackjack hands against the house
//! - `roshambo`: Play rock-paper-scissors against an adaptive opponent
//! - `sim`: Run batch simulations and record round histories
//! - `cfg`: Display current configuration settings and their sources

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ui;

use cli::{Commands, ParlorCli};
use commands::{
    handle_blackjack_command, handle_cfg_command, handle_roshambo_command, handle_sim_command,
};

pub use error::CliError;

/// Exit code for successful execution.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for errors (bad arguments, configuration, I/O, engine).
pub const EXIT_ERROR: i32 = 2;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler. Interactive commands read from the process stdin;
/// all other output goes to the injected streams so tests can capture it.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`EXIT_SUCCESS`] on success, [`EXIT_ERROR`] on any failure.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["parlor", "cfg"];
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = parlor_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let parsed = match ParlorCli::try_parse_from(args.iter().map(|s| s.as_str())) {
        Ok(parsed) => parsed,
        Err(e) => {
            // clap renders help/version as "errors" that belong on stdout
            let rendered = e.render().to_string();
            if e.use_stderr() {
                let _ = write!(err, "{}", rendered);
                return EXIT_ERROR;
            }
            let _ = write!(out, "{}", rendered);
            return EXIT_SUCCESS;
        }
    };

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let result = match parsed.command {
        Commands::Blackjack {
            seed,
            balance,
            decks,
            min_bet,
            log,
        } => handle_blackjack_command(seed, balance, decks, min_bet, log, out, err, &mut stdin),
        Commands::Roshambo {
            seed,
            window,
            edge,
            opponent,
        } => handle_roshambo_command(seed, window, edge, opponent, out, err, &mut stdin),
        Commands::Sim {
            game,
            rounds,
            seed,
            output,
        } => handle_sim_command(game, rounds, seed, output, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            EXIT_ERROR
        }
    }
}
