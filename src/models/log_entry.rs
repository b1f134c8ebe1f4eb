use chrono::{DateTime, Local};

/// Display format of the entry timestamp (local time, millisecond precision).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>, // resolved in the local time zone
    pub caller: String,             // dotted token, e.g. "app.http.Server"
    pub line_no: String,            // kept as text, never used arithmetically
    pub message: String,            // already truncated by the parser
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Local>,
        caller: impl Into<String>,
        line_no: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            caller: caller.into(),
            line_no: line_no.into(),
            message: message.into(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(DISPLAY_FORMAT).to_string()
    }

    /// Whole milliseconds elapsed from `other` to `self` (truncated toward zero).
    pub fn millis_since(&self, other: &LogEntry) -> i64 {
        (self.timestamp - other.timestamp).num_milliseconds()
    }
}
