//! Date/time input parsing.
//!
//! Inputs are interpreted in the machine-local timezone and persisted as
//! absolute UTC timestamps; no timezone is stored separately.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Expected a date like 2025-03-20, got '{}'", input.trim()))
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .with_context(|| format!("Expected a time like 15:00, got '{}'", input.trim()))
}

/// Combine a local date and time into a UTC timestamp. In a DST gap the
/// wall-clock time does not exist locally; fall back to reading it as UTC.
pub fn to_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let naive = date.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
