//! yz-logging: NDJSON score events.
//!
//! Append-only, one JSON object per line, so a truncated trailing line after a
//! crash never corrupts earlier records.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;
use yz_core::{Category, ScoreCalculator, ScoreCard, NUM_DICE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score event schema version.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// Ruleset identifier stamped on every event.
pub const RULESET_ID: &str = "yatzy_standard_v1";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfoV1 {
    pub schema_version: u32,
    pub ruleset_id: &'static str,
    pub core_version: &'static str,
}

impl Default for VersionInfoV1 {
    fn default() -> Self {
        Self {
            schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: RULESET_ID,
            core_version: yz_core::VERSION,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BestV1 {
    pub category: Category,
    pub score: u32,
}

/// One scored hand.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub dice: [u8; NUM_DICE],
    pub scores: ScoreCard,
    pub total: u32,
    pub best: BestV1,
}

impl ScoreEventV1 {
    pub fn from_calculator(calc: &ScoreCalculator) -> Self {
        let scores = calc.score_card();
        let (category, score) = scores.best();
        Self {
            event: "score",
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            dice: calc.hand().dice(),
            scores,
            total: scores.total(),
            best: BestV1 { category, score },
        }
    }
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("ndjson io error: {0}")]
    Io(#[from] io::Error),
    #[error("ndjson encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    /// Score `calc` and append the result as a `score` event.
    pub fn write_score(&mut self, calc: &ScoreCalculator) -> Result<(), NdjsonError> {
        let event = ScoreEventV1::from_calculator(calc);
        tracing::trace!(total = event.total, "logging score event");
        self.write_event(&event)
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
