use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Maintenance actions, run in this order whatever the flag order.
#[derive(Debug, Clone, Copy)]
enum DbAction {
    Migrate,
    Info,
    Check,
    Vacuum,
}

impl DbAction {
    fn label(self) -> &'static str {
        match self {
            DbAction::Migrate => "Running migrations",
            DbAction::Info => "Database information",
            DbAction::Check => "Running integrity check",
            DbAction::Vacuum => "Running VACUUM",
        }
    }

    fn run(self, pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        match self {
            DbAction::Migrate => {
                run_pending_migrations(&pool.conn)?;
                println!("{}✔ Schema is up to date.{}", GREEN, RESET);
            }
            DbAction::Info => stats::print_db_info(pool, &cfg.database)?,
            DbAction::Check => {
                let integrity: String = pool
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

                if integrity != "ok" {
                    println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
                    return Err(AppError::Other(format!("integrity check failed: {integrity}")));
                }
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            }
            DbAction::Vacuum => {
                pool.conn.execute_batch("VACUUM;")?;
                audit(&pool.conn, "vacuum", &cfg.database, "Database compacted");
                println!("{}✔ Vacuum completed.{}", GREEN, RESET);
            }
        }
        Ok(())
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let actions: Vec<DbAction> = [
        (*migrate, DbAction::Migrate),
        (*show_info, DbAction::Info),
        (*check, DbAction::Check),
        (*vacuum, DbAction::Vacuum),
    ]
    .into_iter()
    .filter_map(|(on, action)| on.then_some(action))
    .collect();

    if actions.is_empty() {
        info("Nothing to do: use --migrate, --info, --check or --vacuum.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    for action in actions {
        println!("{}▶ {}…{}", CYAN, action.label(), RESET);
        action.run(&mut pool, cfg)?;
        println!();
    }

    Ok(())
}
