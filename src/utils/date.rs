use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Day-of-week index with Sunday = 0 .. Saturday = 6.
pub fn sunday_based_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Monday of the week containing `date`.
///
/// Sunday belongs to the week that started six days earlier; any other day
/// belongs to the week that started `index - 1` days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = match sunday_based_index(date) {
        0 => 6,
        d => d - 1,
    };
    date - Duration::days(i64::from(back))
}

/// Sunday closing the week that starts on `start`.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(6)
}

/// Both bounds of the Monday-start week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(date);
    (start, week_end(start))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
