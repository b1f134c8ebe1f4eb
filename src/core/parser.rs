//! Line parser: turns one exported log line into a [`LogEntry`].
//!
//! Expected layout (leading spaces allowed):
//! `Jan 5, 2024 @ 10:00:00.000   app.module.Caller   42   :   message text`

use crate::config::Config;
use crate::errors::ParseFailure;
use crate::models::log_entry::LogEntry;
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

// [1] time, [2] caller, [3] line number, [4] message
// Character classes are ASCII only; the year is exactly four digits.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r" *([A-Za-z0-9_]+ [0-9]+, [0-9]{4} @ [0-9]+:[0-9]+:[0-9]+\.[0-9]+)",
        r"[\t\n\f\r ]+([A-Za-z0-9_.]+)",
        r"[\t\n\f\r ]+([0-9]+)",
        r"[\t\n\f\r ]+:[\t\n\f\r ]+(.*)",
    ))
    .expect("line pattern must compile")
});

const DATE_TIME_SEPARATOR: &str = " @ ";
const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M:%S%.3f";

/// Parsed file: entries in input order plus the number of dropped lines.
#[derive(Debug, Default, Clone)]
pub struct ParsedLog {
    pub entries: Vec<LogEntry>,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct LineParser {
    max_message_length: usize,
}

impl LineParser {
    pub fn new(max_message_length: usize) -> Self {
        Self { max_message_length }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.max_message_length)
    }

    pub fn parse_line(&self, line: &str) -> Result<LogEntry, ParseFailure> {
        let caps = LINE_PATTERN
            .captures(line)
            .ok_or(ParseFailure::NoMatch)?;

        let raw_time = caps[1].replace(DATE_TIME_SEPARATOR, " ");
        let naive = NaiveDateTime::parse_from_str(&raw_time, TIMESTAMP_FORMAT)
            .map_err(|e| ParseFailure::InvalidTimestamp(format!("{raw_time}: {e}")))?;
        // DST folds resolve to the earlier instant; skipped hours have no instant at all.
        let timestamp = naive
            .and_local_timezone(Local)
            .earliest()
            .ok_or_else(|| ParseFailure::NonexistentLocalTime(raw_time.clone()))?;

        Ok(LogEntry::new(
            timestamp,
            &caps[2],
            &caps[3],
            truncate_message(&caps[4], self.max_message_length),
        ))
    }

    /// Parse a whole file. Empty lines are ignored, lines that fail to parse
    /// are dropped and only counted.
    pub fn parse_all(&self, content: &str) -> ParsedLog {
        let mut parsed = ParsedLog::default();

        for (idx, raw) in content.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(entry) => parsed.entries.push(entry),
                Err(reason) => {
                    log::debug!("skipping line {}: {}", idx + 1, reason);
                    parsed.skipped += 1;
                }
            }
        }

        parsed
    }
}

/// Messages longer than `max` code points keep their first `max + 1` code points.
pub fn truncate_message(msg: &str, max: usize) -> String {
    match msg.char_indices().nth(max.saturating_add(1)) {
        Some((cut, _)) => msg[..cut].to_string(),
        None => msg.to_string(),
    }
}
