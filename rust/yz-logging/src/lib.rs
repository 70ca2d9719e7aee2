//! yz-logging: NDJSON scoring events.
//!
//! Append-only, one JSON object per line, so a log cut short by a crash is
//! still readable up to the last complete line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event log schema version.
pub const LOG_SCHEMA_VERSION: u32 = 1;

/// Ruleset tag stamped on every event.
pub const RULESET_ID: &str = "yatzy_positional_straights_v1";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Versioning fields carried by every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfoV1 {
    pub log_schema_version: u32,
    pub ruleset_id: String,
}

impl Default for VersionInfoV1 {
    fn default() -> Self {
        Self {
            log_schema_version: LOG_SCHEMA_VERSION,
            ruleset_id: RULESET_ID.to_string(),
        }
    }
}

/// One hand scored in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub dice: [u8; 5],
    pub category: String,
    pub score: i32,
}

impl ScoreEventV1 {
    pub const EVENT: &'static str = "score";

    pub fn new(dice: [u8; 5], category: impl Into<String>, score: i32) -> Self {
        Self {
            event: Self::EVENT.to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            dice,
            category: category.into(),
            score,
        }
    }
}

/// Raw input that failed hand validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedHandEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub input: String,
    pub error: String,
}

impl RejectedHandEventV1 {
    pub const EVENT: &'static str = "rejected_hand";

    pub fn new(input: impl Into<String>, error: impl ToString) -> Self {
        Self {
            event: Self::EVENT.to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            input: input.into(),
            error: error.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum NdjsonError {
    #[error("event log I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("event serialization failed: {0}")]
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

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every complete JSON line, skipping blank or unparsable ones (e.g. a torn last line).
pub fn read_ndjson_lenient(path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>, NdjsonError> {
    let s = std::fs::read_to_string(path)?;
    Ok(s.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}
