//! Time utilities: parsing 12-hour clock strings and formatting minutes/hours.

use crate::errors::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse a 12-hour clock string ("9:00 AM", "12:30 pm") into minutes after midnight.
///
/// 12 AM maps to hour 0 and 1-11 PM add twelve hours. Anything that is not
/// exactly `H:MM` followed by an AM/PM marker is rejected.
pub fn parse_clock_12h(input: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidTime(input.to_string());

    let mut tokens = input.split_whitespace();
    let (Some(clock), Some(meridiem), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };

    let (h, m) = clock.split_once(':').ok_or_else(invalid)?;

    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
        return Err(invalid());
    }

    let hours: i64 = h.parse().map_err(|_| invalid())?;
    let minutes: i64 = m.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&hours) || minutes > 59 {
        return Err(invalid());
    }

    let hours24 = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => hours % 12,
        "PM" => hours % 12 + 12,
        _ => return Err(invalid()),
    };

    Ok(hours24 * 60 + minutes)
}

/// Inverse of [`parse_clock_12h`]: 0 → "12:00 AM", 1050 → "5:30 PM".
pub fn format_clock_12h(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    let (h24, mm) = (m / 60, m % 60);
    let meridiem = if h24 >= 12 { "PM" } else { "AM" };
    let h12 = match h24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, mm, meridiem)
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Hours with one decimal place, e.g. `8.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}
