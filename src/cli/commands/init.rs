use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimesheet…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_initialized(&db_path)?;

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    success("rTimesheet initialization completed!");
    Ok(())
}
