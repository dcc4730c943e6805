use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;
use crate::round::{HandResult, Outcome, Round};

/// Records a single player action during a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Index of the player hand the action applied to
    pub hand: usize,
    /// The action taken
    pub action: PlayerAction,
}

/// Complete record of a finished round, serialized one per line as JSONL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed the deck was built from (enables deterministic replay)
    pub seed: Option<u64>,
    /// Name of the policy that played the round, if any
    #[serde(default)]
    pub policy: Option<String>,
    /// Cards of every player hand, in split order
    pub player_hands: Vec<Vec<Card>>,
    pub dealer_hand: Vec<Card>,
    /// Chronological list of player actions
    pub actions: Vec<ActionRecord>,
    /// Per-hand settlement
    pub results: Vec<HandResult>,
    pub outcome: Outcome,
    /// Net reward over all hands
    pub reward: f64,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    pub fn from_round<R>(round_id: String, seed: Option<u64>, round: &Round<R>) -> Self
    where
        R: rand::Rng,
    {
        Self {
            round_id,
            seed,
            policy: None,
            player_hands: round
                .player_hands()
                .iter()
                .map(|h| h.cards().to_vec())
                .collect(),
            dealer_hand: round.dealer_hand().cards().to_vec(),
            actions: round.actions().to_vec(),
            results: round.results().to_vec(),
            outcome: round.outcome(),
            reward: round.reward(),
            ts: None,
            meta: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
