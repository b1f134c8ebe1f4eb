#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone, TimeDelta};
use rloggap::models::log_entry::LogEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rlg() -> Command {
    cargo_bin_cmd!("rloggap")
}

/// Write `content` to a unique log file inside the system temp dir
pub fn temp_log(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rloggap.log", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp log");
    p
}

/// Config path inside tempdir, removed beforehand so tests start from defaults
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rloggap.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// 2024-01-15 10:00:00.000 local time plus `offset_ms`
pub fn at(offset_ms: i64) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
        .single()
        .expect("unambiguous local time")
        + TimeDelta::milliseconds(offset_ms)
}

pub fn entry(offset_ms: i64, message: &str) -> LogEntry {
    LogEntry::new(at(offset_ms), "app.worker.Pool", "42", message)
}

/// Log line in the exported layout, e.g. `Jan 15, 2024 @ 10:00:03.500 ...`
pub fn line(time: &str, caller: &str, line_no: &str, message: &str) -> String {
    format!("Jan 15, 2024 @ {time}    {caller}    {line_no}    :    {message}")
}

/// The three-entry trace from the manual: 10:00:00.000, 10:00:00.500, 10:00:03.500
pub fn ascending_trace() -> String {
    [
        line("10:00:00.000", "app.http.Server", "10", "request received"),
        line("10:00:00.500", "app.db.Pool", "88", "query started"),
        line("10:00:03.500", "app.db.Pool", "95", "query finished"),
    ]
    .join("\n")
}

/// Same trace, newest first
pub fn descending_trace() -> String {
    [
        line("10:00:03.500", "app.db.Pool", "95", "query finished"),
        line("10:00:00.500", "app.db.Pool", "88", "query started"),
        line("10:00:00.000", "app.http.Server", "10", "request received"),
    ]
    .join("\n")
}
