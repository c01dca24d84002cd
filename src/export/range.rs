// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn invalid(what: &str) -> AppError {
    AppError::InvalidDate(what.to_string())
}

/// Bounds of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` token.
fn token_bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let t = token.trim();
    match t.len() {
        4 => {
            let y: i32 = t.parse().map_err(|_| invalid(t))?;
            let start = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(t))?;
            let end = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(t))?;
            Ok((start, end))
        }
        7 => {
            let (ys, ms) = t.split_once('-').ok_or_else(|| invalid(t))?;
            let y: i32 = ys.parse().map_err(|_| invalid(t))?;
            let m: u32 = ms.parse().map_err(|_| invalid(t))?;
            let start = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(t))?;
            let end = month_last_day(y, m).ok_or_else(|| invalid(t))?;
            Ok((start, end))
        }
        10 => {
            let d = NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| invalid(t))?;
            Ok((d, d))
        }
        _ => Err(invalid(t)),
    }
}

/// Parse a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - two of the same form joined by `:` (e.g. `2025-01:2025-03`)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        return token_bounds(r);
    };

    if start_raw.trim().len() != end_raw.trim().len() {
        return Err(AppError::InvalidDate(format!(
            "{r} (start and end must have the same format)"
        )));
    }

    let (start, _) = token_bounds(start_raw)?;
    let (_, end) = token_bounds(end_raw)?;

    if end < start {
        return Err(AppError::InvalidDate(format!("{r} (end before start)")));
    }
    Ok((start, end))
}

