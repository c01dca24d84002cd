use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::weekday_name;
use crate::utils::formatting::{bold, colorize_status};
use crate::utils::hours_cell;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let ts = TimesheetLogic::get(&pool, *id)?;

        println!("{}", bold(&format!("Timesheet #{}", ts.id)));
        println!("{}• Contractor:{} {}", CYAN, RESET, ts.contractor_id);
        println!("{}• Contract:{}   {}", CYAN, RESET, ts.contract_id);
        println!("{}• Week:{}       {}", CYAN, RESET, ts.week_label());
        println!("{}• Status:{}     {}", CYAN, RESET, colorize_status(ts.status));

        if let Some(reason) = &ts.rejection_reason {
            println!("{}• Rejected:{}   {}", CYAN, RESET, reason);
        }
        if let Some(by) = &ts.approved_by {
            println!(
                "{}• Approved:{}   by {} at {}",
                CYAN,
                RESET,
                by,
                ts.approved_at.as_deref().unwrap_or("-")
            );
        }
        if let Some(at) = &ts.submitted_at {
            println!("{}• Submitted:{}  {}", CYAN, RESET, at);
        }

        println!();
        for (day, hours) in ts.hours.days() {
            println!("  {:<10} {:>5}", weekday_name(day), hours_cell(hours));
        }
        println!("  {:<10} {:>5.1}", "Total", ts.total_hours());

        if !ts.task_description.is_empty() {
            println!();
            println!("{}", bold("Tasks"));
            for line in ts.task_description.lines() {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}
