//! Time range → weekly hours normalizer.
//!
//! A "from/to" pair of 12-hour clock strings plus a calendar date becomes
//! decimal hours (one decimal place) placed in exactly one weekday bucket of
//! the Monday-start week containing the date.

use crate::errors::{AppError, AppResult};
use crate::models::week_hours::WeekHours;
use crate::utils::date::week_bounds;
use crate::utils::time::{MINUTES_PER_DAY, parse_clock_12h};
use chrono::{Datelike, NaiveDate, Weekday};

/// What to do when the end time is earlier than the start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvernightPolicy {
    /// The shift crosses midnight: add 24 hours.
    Wrap,
    /// Treat it as an input mistake.
    Reject,
}

impl OvernightPolicy {
    pub fn from_config(allow_overnight: bool) -> Self {
        if allow_overnight { Self::Wrap } else { Self::Reject }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub minutes: i64,
    pub hours: f64,
    pub week: WeekHours,
}

/// Minutes between two clock readings, applying the overnight policy.
/// Identical readings are rejected instead of being read as a full day.
pub fn elapsed_minutes(
    from_minutes: i64,
    to_minutes: i64,
    policy: OvernightPolicy,
) -> AppResult<i64> {
    let describe = || format!("{} → {}", fmt(from_minutes), fmt(to_minutes));

    let diff = to_minutes - from_minutes;
    match diff {
        0 => Err(AppError::ZeroDuration(describe())),
        d if d > 0 => Ok(d),
        d => match policy {
            OvernightPolicy::Wrap => Ok(d + MINUTES_PER_DAY),
            OvernightPolicy::Reject => Err(AppError::OvernightNotAllowed(describe())),
        },
    }
}

fn fmt(minutes: i64) -> String {
    crate::utils::time::format_clock_12h(minutes)
}

/// Decimal hours rounded to the nearest tenth.
pub fn minutes_to_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}

/// Hours between two "H:MM AM/PM" strings.
pub fn hours_between(from_time: &str, to_time: &str, policy: OvernightPolicy) -> AppResult<f64> {
    let from = parse_clock_12h(from_time)?;
    let to = parse_clock_12h(to_time)?;
    Ok(minutes_to_hours(elapsed_minutes(from, to, policy)?))
}

pub fn normalize_entry(
    from_time: &str,
    to_time: &str,
    date: NaiveDate,
    policy: OvernightPolicy,
) -> AppResult<NormalizedEntry> {
    let from = parse_clock_12h(from_time)?;
    let to = parse_clock_12h(to_time)?;

    let minutes = elapsed_minutes(from, to, policy)?;
    let hours = minutes_to_hours(minutes);

    let weekday = date.weekday();
    let (week_start, week_end) = week_bounds(date);

    Ok(NormalizedEntry {
        date,
        weekday,
        week_start,
        week_end,
        minutes,
        hours,
        week: WeekHours::single(weekday, hours),
    })
}
