use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{OvernightPolicy, normalize_entry};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{self, weekday_name};
use crate::utils::formatting::hours_cell;
use crate::utils::time::{format_hours, format_minutes};

/// Show how a time range would be normalized, without touching the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        from_time,
        to_time,
        date: date_arg,
    } = cmd
    {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let policy = OvernightPolicy::from_config(cfg.allow_overnight);
        let entry = normalize_entry(from_time, to_time, d, policy)?;

        println!("📅 {} ({})", entry.date, weekday_name(entry.weekday));
        println!("🗓️  Week   : {} → {}", entry.week_start, entry.week_end);
        println!(
            "⏱️  Hours  : {} ({})",
            format_hours(entry.hours),
            format_minutes(entry.minutes)
        );
        println!();

        let days = entry.week.days();
        let header: Vec<String> = days
            .iter()
            .map(|(wd, _)| format!("{:>5}", &weekday_name(*wd)[..3]))
            .collect();
        let values: Vec<String> = days
            .iter()
            .map(|(_, h)| format!("{:>5}", hours_cell(*h)))
            .collect();
        println!("{}", header.join(" "));
        println!("{}", values.join(" "));
    }
    Ok(())
}
