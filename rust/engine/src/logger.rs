use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::roshambo::{Move, Winner};
use crate::table::Outcome;

/// Complete record of a settled blackjack round, serialized to JSONL for
/// session history and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackjackRoundRecord {
    /// Unique identifier for this round (format: PREFIX-NNNNNN)
    pub round_id: String,
    /// Shuffle seed in effect (enables deterministic replay)
    pub seed: Option<u64>,
    /// Final cards of each player hand, split hands included
    pub hands: Vec<Vec<Card>>,
    /// Bet funding each hand, after any double-down
    pub bets: Vec<u64>,
    /// The dealer's final cards
    pub dealer: Vec<Card>,
    /// Per-hand settlement results
    pub outcomes: Vec<Outcome>,
    /// Balance after settlement
    pub balance: u64,
    /// Timestamp when the round settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Record of a single roshambo round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoshamboRoundRecord {
    pub round_id: String,
    pub player: Move,
    pub opponent: Move,
    pub winner: Winner,
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(prefix: &str, seq: u32) -> String {
    format!("{}-{:06}", prefix, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON record per round to a JSONL file, injecting a
/// timestamp when the record carries none.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    prefix: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P, prefix: &str) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            prefix: prefix.to_string(),
            seq: 0,
        })
    }

    /// A logger that assigns ids but writes nowhere. Used in tests.
    pub fn sink(prefix: &str) -> Self {
        Self {
            writer: None,
            prefix: prefix.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.prefix, self.seq)
    }

    pub fn write_blackjack(&mut self, record: &BlackjackRoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(now_rfc3339());
        }
        self.write_line(&serde_json::to_string(&rec).map_err(std::io::Error::other)?)
    }

    pub fn write_roshambo(&mut self, record: &RoshamboRoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(now_rfc3339());
        }
        self.write_line(&serde_json::to_string(&rec).map_err(std::io::Error::other)?)
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
