use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::parse_range;
use crate::models::timesheet::TimesheetFilter;
use crate::models::timesheet_status::TimesheetStatus;
use crate::utils::colors::{BLUE, RESET, color_for_total};
use crate::utils::table::{Column, Table};
use crate::utils::{describe_status, hours_cell};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        contractor,
        status,
        period,
    } = cmd
    {
        let filter = TimesheetFilter {
            contractor_id: contractor.clone(),
            status: parse_status(status.as_deref())?,
            week_bounds: match period.as_deref() {
                None | Some("all") => None,
                Some(p) => Some(parse_range(p)?),
            },
        };

        let pool = DbPool::open_initialized(&cfg.database)?;
        let sheets = TimesheetLogic::list(&pool, &filter)?;

        if sheets.is_empty() {
            println!("⚠️  No timesheets found.");
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                Column::numeric("ID", 3),
                Column::new("CONTRACTOR", 12),
                Column::new("CONTRACT", 10),
                Column::new("WEEK", 10),
                Column::numeric("MON", 5),
                Column::numeric("TUE", 5),
                Column::numeric("WED", 5),
                Column::numeric("THU", 5),
                Column::numeric("FRI", 5),
                Column::numeric("SAT", 5),
                Column::numeric("SUN", 5),
                Column::numeric("TOTAL", 6),
                Column::new("STATUS", 9),
            ],
            sep,
        );

        for ts in &sheets {
            let mut row = vec![
                ts.id.to_string(),
                ts.contractor_id.clone(),
                ts.contract_id.clone(),
                ts.week_start.to_string(),
            ];
            row.extend(ts.hours.days().iter().map(|(_, h)| hours_cell(*h)));

            let total = ts.total_hours();
            let total_color = color_for_total(total, cfg.max_weekly_hours);
            row.push(format!("{total_color}{:.1}{RESET}", total));

            let (label, color) = describe_status(ts.status);
            row.push(format!("{color}{label}{RESET}"));

            table.add_row(row);
        }

        print!("{}", table.render());

        let pending = sheets
            .iter()
            .filter(|t| t.status == TimesheetStatus::Submitted)
            .count();
        println!();
        println!(
            "{} timesheet(s), {}{} pending approval{}",
            sheets.len(),
            BLUE,
            pending,
            RESET
        );
    }

    Ok(())
}

pub(crate) fn parse_status(raw: Option<&str>) -> AppResult<Option<TimesheetStatus>> {
    raw.map(|s| TimesheetStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string())))
        .transpose()
}
