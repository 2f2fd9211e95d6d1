//! Time utilities: parsing HH:MM and DD/MM/YYYY, combining them into a
//! single timestamp, and formatting worked durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

pub const TIME_FMT: &str = "%H:%M";
pub const DATE_FMT: &str = "%d/%m/%Y";
/// Combined form used for duration arithmetic: "HH:MM DD/MM/YYYY".
pub const STAMP_FMT: &str = "%H:%M %d/%m/%Y";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, TIME_FMT).ok()
}

pub fn parse_date(d: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(d, DATE_FMT).ok()
}

/// Combine a stored "HH:MM" time and "DD/MM/YYYY" date into one timestamp.
/// Returns None when either cell is malformed.
pub fn combine(time: &str, date: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", time, date), STAMP_FMT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Render a duration as [-]H:MM:SS, e.g. eight hours -> "8:00:00".
/// Negative durations (clock-out before clock-in) keep their sign.
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Resolve "now" either from an explicit "HH:MM DD/MM/YYYY" override or
/// from the local clock. The override keeps tests off the wall clock.
pub fn resolve_now(at: Option<&String>) -> AppResult<(NaiveTime, NaiveDate)> {
    match at {
        Some(s) => {
            let dt = NaiveDateTime::parse_from_str(s, STAMP_FMT)
                .map_err(|_| AppError::MalformedTimestamp(s.clone()))?;
            Ok((dt.time(), dt.date()))
        }
        None => {
            let now = chrono::Local::now().naive_local();
            Ok((now.time(), now.date()))
        }
    }
}
