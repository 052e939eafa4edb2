//! Time utilities: parsing HH:MM and resolving the reference instant
//! used for windowing.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};

/// Accepts "HH:MM" and, for hand-edited rows, "HH:MM:SS".
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// The reference instant for all windowing.
///
/// `--at` pins it explicitly (used by tests and backfilled reviews);
/// otherwise it is wall-clock UTC shifted by the configured fixed offset.
/// Nothing below this point reads the clock: the aggregator always receives
/// `now` as a parameter.
pub fn resolve_now(cfg: &Config, at: Option<&str>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string())),
        None => Ok(Utc::now().naive_utc() + Duration::minutes(cfg.utc_offset_minutes)),
    }
}
